// End-to-end pipeline tests: text/image in, scene adoption out, plus the
// session state machine around them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use image::{Rgba, RgbaImage};

use roomscape::scene::{CameraPose, Scene, Shape};
use roomscape::session::{SessionConfig, SessionController, SessionPhase};
use roomscape::viewer::SceneRenderer;

fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let buffer = RgbaImage::from_pixel(width, height, Rgba(pixel));
    let mut bytes = Vec::new();
    buffer
        .write_with_encoder(image::codecs::png::PngEncoder::new(&mut bytes))
        .unwrap();
    bytes
}

/// Test renderer that records every adopted scene and its disposal.
#[derive(Default)]
struct LedgerRenderer {
    adopted: Arc<Mutex<Vec<Scene>>>,
    disposed: Arc<Mutex<bool>>,
}

impl SceneRenderer for LedgerRenderer {
    fn render(&mut self, scene: &Scene, _camera: &CameraPose) {
        self.adopted.lock().unwrap().push(scene.clone());
    }

    fn dispose(&mut self) {
        *self.disposed.lock().unwrap() = true;
    }
}

#[tokio::test]
async fn text_submission_reaches_ready_with_a_scene() {
    let controller = SessionController::new(SessionConfig::default());

    let scene = controller
        .submit_text("A modern living room with a sofa and a coffee table, 15ft by 12ft")
        .await
        .unwrap();

    assert!(!scene.primitives.is_empty());
    assert_eq!(scene.camera.position, [5.0, 3.0, 5.0]);
    assert_eq!(scene.camera.look_at, [0.0, 1.0, 0.0]);

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, SessionPhase::Ready);
    assert!(snapshot.has_scene);
    assert!(snapshot.last_error.is_none());
}

#[tokio::test]
async fn image_alone_does_not_compose() {
    let controller = SessionController::new(SessionConfig::default());

    let result = controller
        .submit_image(png_bytes(32, 32, [120, 80, 40, 255]))
        .await
        .unwrap();

    assert!(result.is_none());
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, SessionPhase::Idle);
    assert!(snapshot.has_image);
    assert!(!snapshot.has_scene);
}

#[tokio::test]
async fn image_after_text_recomposes() {
    let controller = SessionController::new(SessionConfig::default());

    let first = controller.submit_text("a bedroom").await.unwrap();
    let recomposed = controller
        .submit_image(png_bytes(32, 32, [120, 80, 40, 255]))
        .await
        .unwrap()
        .expect("existing record triggers recomposition");

    // The image does not alter geometry, but the scene is still rebuilt
    // wholesale: a fresh allocation, equal content.
    assert!(!Arc::ptr_eq(&first, &recomposed));
    assert_eq!(*first, *recomposed);
}

#[tokio::test]
async fn regenerate_requires_a_record() {
    let controller = SessionController::new(SessionConfig::default());
    assert!(controller.regenerate().await.is_err());

    controller.submit_text("a kitchen").await.unwrap();
    let again = controller.regenerate().await.unwrap();
    assert_eq!(*again, **controller.scene().await.as_ref().unwrap());
}

#[tokio::test]
async fn overlapping_requests_are_rejected() {
    let controller = Arc::new(SessionController::new(SessionConfig {
        compose_delay: Duration::from_millis(200),
    }));

    let background = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit_text("a rustic office").await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    let rejected = controller.submit_text("a second request").await;
    assert!(rejected.is_err());

    let first = background.await.unwrap().unwrap();
    assert!(!first.primitives.is_empty());
    assert_eq!(controller.snapshot().await.phase, SessionPhase::Ready);
}

#[tokio::test]
async fn failed_image_leaves_prior_scene_intact() {
    let controller = SessionController::new(SessionConfig::default());

    let scene = controller.submit_text("a blue living room").await.unwrap();

    let err = controller.submit_image(b"not an image".to_vec()).await;
    assert!(err.is_err());

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, SessionPhase::Error);
    assert!(snapshot.last_error.is_some());
    assert!(snapshot.has_scene);

    // Prior scene untouched, and the error phase clears on the next input.
    assert!(Arc::ptr_eq(
        &scene,
        controller.scene().await.as_ref().unwrap()
    ));
    let recovered = controller.submit_text("a blue living room").await.unwrap();
    assert_eq!(*scene, *recovered);
    assert_eq!(controller.snapshot().await.phase, SessionPhase::Ready);
}

#[tokio::test]
async fn renderer_adopts_each_scene_wholesale() {
    let controller = SessionController::new(SessionConfig::default());

    let renderer = LedgerRenderer::default();
    let adopted = renderer.adopted.clone();
    controller.attach_renderer(Box::new(renderer)).await;

    controller.submit_text("a bedroom with a bed").await.unwrap();
    controller.regenerate().await.unwrap();

    let scenes = adopted.lock().unwrap();
    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0], scenes[1]);
    assert!(scenes[0]
        .primitives
        .iter()
        .any(|p| matches!(p.shape, Shape::Box(_))));
}

#[tokio::test]
async fn replacing_the_renderer_disposes_the_old_one() {
    let controller = SessionController::new(SessionConfig::default());

    let first = LedgerRenderer::default();
    let disposed = first.disposed.clone();
    controller.attach_renderer(Box::new(first)).await;
    controller
        .attach_renderer(Box::new(LedgerRenderer::default()))
        .await;

    assert!(*disposed.lock().unwrap());
}
