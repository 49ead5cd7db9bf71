// Host-side tests for the room instance table.

use glam::{Mat4, Vec3};
use room_core::{
    build_instances, build_instances_from, room_instance_count, CubeVertex, InstanceData,
    ModelControls, Placement, Prototype, CUBE_INDICES, CUBE_VERTICES, DARK_TILE, ROOM,
};

const EPS: f32 = 1e-5;

#[test]
fn gpu_layouts_have_expected_sizes() {
    assert_eq!(std::mem::size_of::<CubeVertex>(), 24);
    assert_eq!(std::mem::size_of::<InstanceData>(), 80);
}

#[test]
fn cube_mesh_is_well_formed() {
    assert_eq!(CUBE_INDICES.len(), 36);
    assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_VERTICES.len()));
    for v in CUBE_VERTICES {
        assert!(v.position.iter().all(|&c| c == 0.0 || c == 0.5));
        let n = Vec3::from_array(v.normal);
        assert_eq!(n.length(), 1.0);
        // every vertex sits on the face its normal points out of
        let p = Vec3::from_array(v.position);
        assert_eq!(p.dot(n.abs()), if n.max_element() > 0.0 { 0.5 } else { 0.0 });
    }
}

#[test]
fn room_expands_to_counted_instances() {
    let controls = ModelControls::default();
    let instances = build_instances(&controls);
    assert_eq!(instances.len(), room_instance_count(ROOM));
    assert!(instances.iter().all(|i| i.model().is_finite()));
}

#[test]
fn room_matches_the_drawn_scene() {
    // 309 floor tiles, 3 two-part chairs, 3 five-part tables, 9 blocks,
    // 5 three-part tools
    assert_eq!(room_instance_count(ROOM), 309 + 6 + 15 + 9 + 15);
    let tiles: usize = ROOM
        .iter()
        .filter(|p| p.prototype == Prototype::Tile)
        .map(Placement::instance_count)
        .sum();
    assert_eq!(tiles, 309);
}

#[test]
fn first_dark_row_starts_at_the_front() {
    let instances = build_instances(&ModelControls::default());
    for (k, inst) in instances.iter().take(11).enumerate() {
        assert_eq!(inst.color, DARK_TILE);
        let pos = inst.model().w_axis.truncate();
        let expected = Vec3::new(0.0, -1.0, 0.2 - 0.4 * k as f32 - 0.1);
        assert!(pos.abs_diff_eq(expected, EPS), "tile {k}: {pos}");
    }
}

#[test]
fn front_table_leans() {
    let mut offset = 0;
    let mut front = None;
    for p in ROOM {
        if p.prototype == Prototype::Table && p.tilt_deg != Vec3::ZERO {
            front = Some((offset, *p));
            break;
        }
        offset += p.instance_count();
    }
    let (offset, table) = front.unwrap();
    assert_eq!(table.tilt_deg, Vec3::new(3.0, -1.0, 0.0));

    let instances = build_instances(&ModelControls::default());
    let top = instances[offset].model();
    let expected = Mat4::from_rotation_x(3.0_f32.to_radians())
        * Mat4::from_rotation_y((-1.0_f32).to_radians())
        * Mat4::from_translation(Vec3::new(0.6, -0.2, 1.0))
        * Mat4::from_scale(Vec3::new(0.7, 0.6, 0.5))
        * Mat4::from_translation(Vec3::new(-0.125, 0.0, 0.0))
        * Mat4::from_scale(Vec3::new(2.5, 0.2, 2.0));
    assert!(top.abs_diff_eq(expected, EPS));
}

#[test]
fn floor_tiles_never_overlap() {
    let mut out = Vec::new();
    for p in ROOM.iter().filter(|p| p.prototype == Prototype::Tile) {
        p.expand_into(Mat4::IDENTITY, 0.0, &mut out);
    }
    let mut cells: Vec<(i32, i32)> = out
        .iter()
        .map(|i| {
            let w = i.model().w_axis;
            ((w.x * 100.0).round() as i32, (w.z * 100.0).round() as i32)
        })
        .collect();
    let total = cells.len();
    cells.sort_unstable();
    cells.dedup();
    assert_eq!(cells.len(), total);
}

#[test]
fn scene_transform_moves_the_whole_room() {
    let still = build_instances(&ModelControls::default());
    let mut controls = ModelControls::default();
    controls.translation = Vec3::new(1.0, 0.0, -0.5);
    let moved = build_instances(&controls);
    for (a, b) in still.iter().zip(&moved) {
        let shift = b.model().w_axis.truncate() - a.model().w_axis.truncate();
        assert!(shift.abs_diff_eq(Vec3::new(1.0, 0.0, -0.5), EPS));
    }

    let mut controls = ModelControls::default();
    controls.scale = Vec3::splat(2.0);
    let grown = build_instances(&controls);
    for (a, b) in still.iter().zip(&grown) {
        let expected = Mat4::from_scale(Vec3::splat(2.0)) * a.model();
        assert!(b.model().abs_diff_eq(expected, 1e-4));
    }
}

#[test]
fn empty_table_draws_nothing() {
    assert!(build_instances_from(&[], &ModelControls::default()).is_empty());
}

#[test]
fn instance_counts_follow_prototype_parts() {
    let chairs = Placement::single(Prototype::Chair, Vec3::ZERO).repeated(Vec3::Z, 3);
    assert_eq!(chairs.instance_count(), 6);
    let tables = Placement::single(Prototype::Table, Vec3::ZERO).repeated(Vec3::Z, 2);
    assert_eq!(tables.instance_count(), 10);
    let none = Placement::single(Prototype::Tool, Vec3::ZERO).repeated(Vec3::Z, 0);
    assert_eq!(none.instance_count(), 0);
    let mut out = Vec::new();
    none.expand_into(Mat4::IDENTITY, 0.0, &mut out);
    assert!(out.is_empty());
}

#[test]
fn tile_row_steps_back_along_z() {
    let row = Placement::single(Prototype::Tile, Vec3::new(0.4, 0.0, 0.2))
        .repeated(Vec3::new(0.0, 0.0, -0.4), 3)
        .colored(DARK_TILE);
    let mut out = Vec::new();
    row.expand_into(Mat4::IDENTITY, 0.0, &mut out);
    assert_eq!(out.len(), 3);
    for (k, inst) in out.iter().enumerate() {
        assert_eq!(inst.color, DARK_TILE);
        let pos = inst.model().w_axis.truncate();
        let expected = Vec3::new(0.4, -1.0, 0.2 - 0.4 * k as f32 - 0.1);
        assert!(pos.abs_diff_eq(expected, EPS), "tile {k}: {pos}");
    }
}

#[test]
fn placement_scale_applies_to_part_offsets() {
    let block = Placement::single(Prototype::Table, Vec3::new(1.0, 0.0, 0.0))
        .scaled(Vec3::new(2.0, 1.0, 1.0));
    let mut out = Vec::new();
    block.expand_into(Mat4::IDENTITY, 0.0, &mut out);
    // table top offset x = -0.125, doubled by the placement scale
    let top = out[0].model().w_axis.truncate();
    assert!(top.abs_diff_eq(Vec3::new(0.75, 0.0, 0.0), EPS));
}

#[test]
fn tilt_rotates_the_whole_placement() {
    let flat = Placement::single(Prototype::Block, Vec3::new(0.0, 0.0, 1.0));
    let tilted = flat.tilted(Vec3::new(0.0, 90.0, 0.0));
    let anchor = tilted.anchors(Mat4::IDENTITY).next().unwrap();
    let expected = Mat4::from_rotation_y(90.0_f32.to_radians())
        * Mat4::from_translation(Vec3::new(0.0, 0.0, 1.0));
    assert!(anchor.abs_diff_eq(expected, EPS));
    assert!(anchor.w_axis.truncate().abs_diff_eq(Vec3::X, EPS));
}

#[test]
fn chair_backs_follow_the_y_rotation() {
    let chair = Placement::single(Prototype::Chair, Vec3::new(0.5, -0.7, 0.95));
    let (mut still, mut spun) = (Vec::new(), Vec::new());
    chair.expand_into(Mat4::IDENTITY, 0.0, &mut still);
    chair.expand_into(Mat4::IDENTITY, 90.0, &mut spun);
    assert_eq!(still.len(), 2);
    // seat ignores the spin, the back turns with it
    assert_eq!(still[0], spun[0]);
    assert!(!still[1].model().abs_diff_eq(spun[1].model(), EPS));

    let mut controls = ModelControls::default();
    let before = build_instances(&controls);
    controls.rotation_deg.y += 30.0;
    let after = build_instances(&controls);
    let changed = before
        .iter()
        .zip(&after)
        .filter(|(a, b)| a != b)
        .count();
    // only the three chair backs
    assert_eq!(changed, 3);
}
