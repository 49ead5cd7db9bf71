// Host-side tests for the free-fly camera.

use glam::{Mat4, Vec3};
use room_core::{Camera, CameraMovement, DEFAULT_SPEED, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN};

const EPS: f32 = 1e-5;

fn assert_orthonormal(cam: &Camera) {
    let (f, r, u) = (cam.front(), cam.right(), cam.up());
    assert!(f.dot(r).abs() < EPS, "front·right = {}", f.dot(r));
    assert!(f.dot(u).abs() < EPS, "front·up = {}", f.dot(u));
    assert!(r.dot(u).abs() < EPS, "right·up = {}", r.dot(u));
    for v in [f, r, u] {
        assert!((v.length() - 1.0).abs() < EPS, "not unit: {v}");
    }
}

#[test]
fn default_camera_looks_down_negative_z() {
    let cam = Camera::default();
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
    assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
    assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
    assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
    assert_eq!(cam.zoom(), 45.0);
}

#[test]
fn basis_is_orthonormal_across_yaw_and_pitch() {
    let mut yaw = -360.0;
    while yaw <= 360.0 {
        let mut pitch = -89.0;
        while pitch <= 89.0 {
            let cam = Camera::with_angles(Vec3::ZERO, Vec3::Y, yaw, pitch);
            assert_orthonormal(&cam);
            pitch += 8.9;
        }
        yaw += 15.0;
    }
}

#[test]
fn basis_stays_orthonormal_under_mouse_input() {
    let mut cam = Camera::default();
    let deltas = [(35.0, 12.0), (-400.0, 900.0), (1.5, -2000.0), (720.0, 3.0)];
    for (dx, dy) in deltas {
        cam.process_mouse_movement(dx, dy, true);
        assert!(cam.pitch() <= PITCH_LIMIT && cam.pitch() >= -PITCH_LIMIT);
        assert_orthonormal(&cam);
    }
}

#[test]
fn pitch_is_clamped_only_when_constrained() {
    let mut cam = Camera::default();
    cam.process_mouse_movement(0.0, 5000.0, true);
    assert_eq!(cam.pitch(), PITCH_LIMIT);
    cam.process_mouse_movement(0.0, -50000.0, true);
    assert_eq!(cam.pitch(), -PITCH_LIMIT);

    let mut free = Camera::default();
    free.process_mouse_movement(0.0, 1000.0, false);
    assert!((free.pitch() - 100.0).abs() < EPS);
}

#[test]
fn mouse_movement_scales_by_sensitivity() {
    let mut cam = Camera::default();
    cam.process_mouse_movement(10.0, -20.0, true);
    assert!((cam.yaw() - (-90.0 + 1.0)).abs() < EPS);
    assert!((cam.pitch() - (-2.0)).abs() < EPS);
}

#[test]
fn scroll_zoom_stays_within_bounds() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.process_mouse_scroll(-1000.0);
        assert!(cam.zoom() <= ZOOM_MAX);
    }
    assert_eq!(cam.zoom(), ZOOM_MAX);
    for _ in 0..50 {
        cam.process_mouse_scroll(1000.0);
        assert!(cam.zoom() >= ZOOM_MIN);
    }
    assert_eq!(cam.zoom(), ZOOM_MIN);
    cam.process_mouse_scroll(-3.0);
    assert_eq!(cam.zoom(), ZOOM_MIN + 3.0);
}

#[test]
fn forward_moves_exactly_speed_times_dt_along_front() {
    for dt in [0.0_f32, 0.016, 1.0] {
        let mut cam = Camera::with_angles(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 30.0, 20.0);
        let start = cam.position;
        let front = cam.front();
        cam.process_keyboard(CameraMovement::Forward, dt);
        let moved = cam.position - start;
        assert!(moved.abs_diff_eq(front * DEFAULT_SPEED * dt, EPS), "dt={dt}");
        assert!((moved.length() - DEFAULT_SPEED * dt).abs() < EPS, "dt={dt}");
    }
}

#[test]
fn opposite_directions_cancel() {
    let mut cam = Camera::default();
    let start = cam.position;
    cam.process_keyboard(CameraMovement::Left, 0.5);
    cam.process_keyboard(CameraMovement::Right, 0.5);
    cam.process_keyboard(CameraMovement::Up, 0.25);
    cam.process_keyboard(CameraMovement::Down, 0.25);
    assert!(cam.position.abs_diff_eq(start, EPS));
}

#[test]
fn strafing_follows_right_vector() {
    let mut cam = Camera::default();
    cam.process_keyboard(CameraMovement::Right, 1.0);
    assert!(cam.position.abs_diff_eq(Vec3::new(DEFAULT_SPEED, 0.0, 3.0), EPS));
}

#[test]
fn yaw_keys_turn_without_moving() {
    let mut cam = Camera::default();
    let start = cam.position;
    cam.process_keyboard(CameraMovement::YawRight, 1.0);
    assert!(cam.yaw() > -90.0);
    assert_eq!(cam.position, start);
    assert_orthonormal(&cam);
    cam.process_keyboard(CameraMovement::YawLeft, 1.0);
    assert!((cam.yaw() + 90.0).abs() < EPS);
}

#[test]
fn projection_uses_zoom_as_fov() {
    let mut cam = Camera::default();
    cam.process_mouse_scroll(15.0);
    let expected = Mat4::perspective_rh(30.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
    assert!(cam.projection_matrix(4.0 / 3.0).abs_diff_eq(expected, EPS));
}

#[test]
fn view_matrix_puts_camera_at_origin() {
    let cam = Camera::with_angles(Vec3::new(2.0, -1.0, 5.0), Vec3::Y, 10.0, -30.0);
    let view = cam.view_matrix();
    assert!(view.transform_point3(cam.position).abs_diff_eq(Vec3::ZERO, EPS));
    let ahead = view.transform_point3(cam.position + cam.front());
    assert!(ahead.abs_diff_eq(Vec3::NEG_Z, EPS));
}
