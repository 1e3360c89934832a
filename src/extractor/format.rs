//! Human-readable renderings of an attribute record.

use super::record::AttributeRecord;

// Feet is the only unit label ever emitted, regardless of the input unit.
fn feet(value: f64) -> String {
    format!("{}ft", value)
}

fn join_keywords(keywords: impl IntoIterator<Item = &'static str>) -> String {
    keywords.into_iter().collect::<Vec<_>>().join(", ")
}

/// Multi-line summary of the extracted information for display to the user.
/// Sections appear only when their source field is non-empty, in fixed
/// order: room type, dimensions, styles, colors, furniture, requests.
pub fn format_extracted_info(record: &AttributeRecord) -> String {
    let mut sections = Vec::new();

    sections.push(format!("Room Type: {}", record.room_type.display_label()));

    let dims = &record.dimensions;
    let width = dims.width.filter(|v| *v != 0.0);
    let length = dims.length.filter(|v| *v != 0.0);
    let height = dims.height.filter(|v| *v != 0.0);
    if width.is_some() || length.is_some() {
        let mut parts = Vec::new();
        if let Some(w) = width {
            parts.push(format!("Width: {}", feet(w)));
        }
        if let Some(l) = length {
            parts.push(format!("Length: {}", feet(l)));
        }
        if let Some(h) = height {
            parts.push(format!("Height: {}", feet(h)));
        }
        sections.push(format!("Dimensions: {}", parts.join(", ")));
    }

    if !record.style_preferences.is_empty() {
        sections.push(format!(
            "Style Preferences: {}",
            join_keywords(record.style_preferences.iter().map(|s| s.keyword()))
        ));
    }

    if !record.color_scheme.is_empty() {
        sections.push(format!(
            "Color Scheme: {}",
            join_keywords(record.color_scheme.iter().map(|c| c.keyword()))
        ));
    }

    if !record.furniture_items.is_empty() {
        sections.push(format!(
            "Furniture: {}",
            join_keywords(record.furniture_items.iter().map(|f| f.keyword()))
        ));
    }

    if !record.special_requests.is_empty() {
        sections.push(format!(
            "Special Considerations: {}",
            record.special_requests.join(", ")
        ));
    }

    sections.join("\n")
}

/// Single-sentence natural-language prompt describing the requested scene.
/// Each segment is appended only when its source data is non-empty, in a
/// fixed template order.
pub fn generate_prompt_from_info(record: &AttributeRecord) -> String {
    let mut prompt = String::from("Generate a 3D model of a ");

    if !record.style_preferences.is_empty() {
        let styles = record
            .style_preferences
            .iter()
            .map(|s| s.keyword())
            .collect::<Vec<_>>()
            .join(" ");
        prompt.push_str(&styles);
        prompt.push(' ');
    }
    prompt.push_str(record.room_type.keyword());

    let width = record.dimensions.width.filter(|v| *v != 0.0);
    let length = record.dimensions.length.filter(|v| *v != 0.0);
    if let (Some(w), Some(l)) = (width, length) {
        prompt.push_str(&format!(
            " with approximate dimensions of {} x {}",
            feet(w),
            feet(l)
        ));
        if let Some(h) = record.dimensions.height.filter(|v| *v != 0.0) {
            prompt.push_str(&format!(" x {}", feet(h)));
        }
    }

    if !record.color_scheme.is_empty() {
        prompt.push_str(&format!(
            " featuring {} colors",
            join_keywords(record.color_scheme.iter().map(|c| c.keyword()))
        ));
    }

    if !record.furniture_items.is_empty() {
        prompt.push_str(&format!(
            " with {}",
            join_keywords(record.furniture_items.iter().map(|f| f.keyword()))
        ));
    }

    if !record.special_requests.is_empty() {
        prompt.push_str(&format!(
            ". Special considerations: {}",
            record.special_requests.join(", ")
        ));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::super::extract;
    use super::*;

    #[test]
    fn formats_full_record() {
        let record = extract(
            "A modern living room, white and blue, with a sofa and table, \
             15ft by 12ft, near a window",
        );
        let formatted = format_extracted_info(&record);

        let expected = "Room Type: Living room\n\
                        Dimensions: Width: 15ft, Length: 12ft\n\
                        Style Preferences: modern\n\
                        Color Scheme: blue, white\n\
                        Furniture: sofa, table\n\
                        Special Considerations: Consider window placement and natural light";
        assert_eq!(formatted, expected);
    }

    #[test]
    fn formats_minimal_record() {
        let record = extract("nothing to see here");
        assert_eq!(format_extracted_info(&record), "Room Type: Generic");
    }

    #[test]
    fn prompt_includes_only_present_segments() {
        let record = extract("a bathroom");
        assert_eq!(
            generate_prompt_from_info(&record),
            "Generate a 3D model of a bathroom"
        );
    }

    #[test]
    fn prompt_renders_dimensions_and_height() {
        let record = extract("a minimalist office 12ft by 10ft by 9ft with a desk");
        assert_eq!(
            generate_prompt_from_info(&record),
            "Generate a 3D model of a minimalist office with approximate dimensions of \
             12ft x 10ft x 9ft with desk"
        );
    }

    #[test]
    fn prompt_skips_dimensions_without_both_width_and_length() {
        let record = extract("a rustic kitchen in green");
        assert_eq!(
            generate_prompt_from_info(&record),
            "Generate a 3D model of a rustic kitchen featuring green colors"
        );
    }

    #[test]
    fn whole_numbers_render_without_decimals() {
        assert_eq!(feet(15.0), "15ft");
        assert_eq!(feet(15.5), "15.5ft");
    }
}
