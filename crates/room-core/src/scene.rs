//! The room as data: cube mesh, furniture prototypes and the placement
//! table that one routine expands into per-instance transforms.

use glam::{Mat4, Vec3};

use crate::constants::TILE_STEP;
use crate::controls::ModelControls;
use crate::transform::{euler_rotation, Repeat};

pub type Rgba = [f32; 4];

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One cube ready for upload as a per-instance vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn new(model: Mat4, color: Rgba) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

const fn v(position: [f32; 3], normal: [f32; 3]) -> CubeVertex {
    CubeVertex { position, normal }
}

const NZ: [f32; 3] = [0.0, 0.0, -1.0];
const PX: [f32; 3] = [1.0, 0.0, 0.0];
const PZ: [f32; 3] = [0.0, 0.0, 1.0];
const NX: [f32; 3] = [-1.0, 0.0, 0.0];
const PY: [f32; 3] = [0.0, 1.0, 0.0];
const NY: [f32; 3] = [0.0, -1.0, 0.0];

/// Cube spanning `[0, 0.5]³`, four vertices per face.
pub const CUBE_VERTICES: [CubeVertex; 24] = [
    v([0.0, 0.0, 0.0], NZ),
    v([0.5, 0.0, 0.0], NZ),
    v([0.5, 0.5, 0.0], NZ),
    v([0.0, 0.5, 0.0], NZ),
    v([0.5, 0.0, 0.0], PX),
    v([0.5, 0.5, 0.0], PX),
    v([0.5, 0.0, 0.5], PX),
    v([0.5, 0.5, 0.5], PX),
    v([0.0, 0.0, 0.5], PZ),
    v([0.5, 0.0, 0.5], PZ),
    v([0.5, 0.5, 0.5], PZ),
    v([0.0, 0.5, 0.5], PZ),
    v([0.0, 0.0, 0.5], NX),
    v([0.0, 0.5, 0.5], NX),
    v([0.0, 0.5, 0.0], NX),
    v([0.0, 0.0, 0.0], NX),
    v([0.5, 0.5, 0.5], PY),
    v([0.5, 0.5, 0.0], PY),
    v([0.0, 0.5, 0.0], PY),
    v([0.0, 0.5, 0.5], PY),
    v([0.0, 0.0, 0.0], NY),
    v([0.5, 0.0, 0.0], NY),
    v([0.5, 0.0, 0.5], NY),
    v([0.0, 0.0, 0.5], NY),
];

/// 12 triangles.
pub const CUBE_INDICES: [u16; 36] = [
    0, 3, 2, 2, 1, 0, //
    4, 5, 7, 7, 6, 4, //
    8, 9, 10, 10, 11, 8, //
    12, 13, 14, 14, 15, 12, //
    16, 17, 18, 18, 19, 16, //
    20, 21, 22, 22, 23, 20, //
];

/// One cube of a prototype, positioned in the prototype's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub offset: Vec3,
    pub scale: Vec3,
    /// `None` takes the placement's color.
    pub color: Option<Rgba>,
    /// Rotates about Y with the interactive controls, after the offset.
    pub spin: bool,
}

const fn part(offset: [f32; 3], scale: [f32; 3], color: Option<Rgba>) -> Part {
    Part {
        offset: Vec3::new(offset[0], offset[1], offset[2]),
        scale: Vec3::new(scale[0], scale[1], scale[2]),
        color,
        spin: false,
    }
}

const fn spinning(p: Part) -> Part {
    Part { spin: true, ..p }
}

pub const DARK_TILE: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const LIGHT_TILE: Rgba = [1.0, 1.0, 1.0, 1.0];

const SEAT: Rgba = [1.0, 0.1, 0.0, 1.0];
const BACKREST: Rgba = [0.5, 0.1, 0.0, 1.0];
const TABLE_TOP: Rgba = [0.9, 0.6, 0.4, 1.0];
const TABLE_LEG: Rgba = [0.5, 0.3, 0.1, 1.0];
const TOOL_BASE: Rgba = [0.3, 0.4, 1.0, 0.0];
const TOOL_STEM: Rgba = [1.0, 1.0, 1.0, 1.0];
const TOOL_HEAD: Rgba = [1.0, 0.0, 1.0, 1.0];

static BLOCK_PARTS: [Part; 1] = [part([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], None)];

// Flat (zero-height) square dropped one unit below its anchor.
static TILE_PARTS: [Part; 1] = [part([0.0, -1.0, -0.1], [0.4, 0.0, 0.4], None)];

static CHAIR_PARTS: [Part; 2] = [
    part([0.1, -0.2, -1.1], [1.5, 0.6, 1.5], Some(SEAT)),
    spinning(part([0.1, -0.2, -1.1], [0.2, 1.6, 1.5], Some(BACKREST))),
];

// Legs use a negative Y scale so they hang below the top.
static TABLE_PARTS: [Part; 5] = [
    part([-0.125, 0.0, 0.0], [2.5, 0.2, 2.0], Some(TABLE_TOP)),
    part([0.0, 0.0, 0.0], [0.2, -2.0, 0.2], Some(TABLE_LEG)),
    part([0.0, 0.0, 0.9], [0.2, -2.0, 0.2], Some(TABLE_LEG)),
    part([0.9, 0.0, 0.9], [0.2, -2.0, 0.2], Some(TABLE_LEG)),
    part([0.9, 0.0, 0.0], [0.2, -2.0, 0.2], Some(TABLE_LEG)),
];

static TOOL_PARTS: [Part; 3] = [
    part([0.0, -1.0, -0.1], [0.4, 0.0, 0.4], Some(TOOL_BASE)),
    part([0.07, -1.0, 0.0], [0.1, 1.0, 0.1], Some(TOOL_STEM)),
    part([0.0, -0.5, 0.0], [0.4, 0.4, 0.4], Some(TOOL_HEAD)),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prototype {
    Block,
    Tile,
    Chair,
    Table,
    Tool,
}

impl Prototype {
    pub fn parts(self) -> &'static [Part] {
        match self {
            Prototype::Block => &BLOCK_PARTS,
            Prototype::Tile => &TILE_PARTS,
            Prototype::Chair => &CHAIR_PARTS,
            Prototype::Table => &TABLE_PARTS,
            Prototype::Tool => &TOOL_PARTS,
        }
    }
}

/// A row of `count` copies of a prototype.
///
/// Copy `k` of part `p` gets
/// `parent · Rtilt · T(origin) · T(step)^k · S(scale) · T(p.offset) · [Ry] · S(p.scale)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub prototype: Prototype,
    pub origin: Vec3,
    pub step: Vec3,
    pub count: usize,
    pub scale: Vec3,
    pub tilt_deg: Vec3,
    pub color: Rgba,
}

impl Placement {
    pub const fn single(prototype: Prototype, origin: Vec3) -> Self {
        Self {
            prototype,
            origin,
            step: Vec3::ZERO,
            count: 1,
            scale: Vec3::ONE,
            tilt_deg: Vec3::ZERO,
            color: LIGHT_TILE,
        }
    }

    pub const fn repeated(mut self, step: Vec3, count: usize) -> Self {
        self.step = step;
        self.count = count;
        self
    }

    pub const fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub const fn tilted(mut self, tilt_deg: Vec3) -> Self {
        self.tilt_deg = tilt_deg;
        self
    }

    pub const fn colored(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn instance_count(&self) -> usize {
        self.count * self.prototype.parts().len()
    }

    /// Anchor matrices for each copy under `parent`, before the placement
    /// scale.
    pub fn anchors(&self, parent: Mat4) -> impl Iterator<Item = Mat4> {
        let start = parent * euler_rotation(self.tilt_deg) * Mat4::from_translation(self.origin);
        Repeat::new(start, self.step, self.count).iter()
    }

    pub fn expand_into(&self, parent: Mat4, spin_y_deg: f32, out: &mut Vec<InstanceData>) {
        let placement_scale = Mat4::from_scale(self.scale);
        let spin = Mat4::from_rotation_y(spin_y_deg.to_radians());
        for anchor in self.anchors(parent) {
            let base = anchor * placement_scale;
            for p in self.prototype.parts() {
                let mut local = Mat4::from_translation(p.offset);
                if p.spin {
                    local *= spin;
                }
                local *= Mat4::from_scale(p.scale);
                out.push(InstanceData::new(base * local, p.color.unwrap_or(self.color)));
            }
        }
    }
}

const fn at(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

const STEP: Vec3 = Vec3::new(TILE_STEP[0], TILE_STEP[1], TILE_STEP[2]);

const fn tiles(x: f32, z: f32, count: usize, color: Rgba) -> Placement {
    Placement::single(Prototype::Tile, at(x, 0.0, z))
        .repeated(STEP, count)
        .colored(color)
}

const fn block(origin: Vec3, size: Vec3, color: Rgba) -> Placement {
    Placement::single(Prototype::Block, origin)
        .scaled(size)
        .colored(color)
}

/// The full room. Floor rows first, then furniture, walls and tools.
pub const ROOM: &[Placement] = &[
    // checkerboard floor, dark rows
    tiles(0.0, 0.2, 11, DARK_TILE),
    tiles(0.4, 0.2, 11, DARK_TILE),
    tiles(0.2, 0.0, 10, DARK_TILE),
    tiles(-0.4, 0.2, 11, DARK_TILE),
    tiles(-0.2, 0.0, 10, DARK_TILE),
    tiles(-0.8, 0.2, 11, DARK_TILE),
    tiles(0.8, 0.2, 11, DARK_TILE),
    tiles(-0.6, 0.0, 10, DARK_TILE),
    tiles(0.6, 0.0, 10, DARK_TILE),
    tiles(-1.0, 0.0, 10, DARK_TILE),
    // light rows
    tiles(0.0, 0.0, 10, LIGHT_TILE),
    tiles(0.4, 0.0, 10, LIGHT_TILE),
    tiles(0.2, 0.2, 11, LIGHT_TILE),
    tiles(-0.4, 0.0, 10, LIGHT_TILE),
    tiles(-0.2, 0.2, 11, LIGHT_TILE),
    tiles(-0.8, 0.0, 10, LIGHT_TILE),
    tiles(0.8, 0.0, 10, LIGHT_TILE),
    tiles(-0.6, 0.2, 11, LIGHT_TILE),
    tiles(0.6, 0.2, 11, LIGHT_TILE),
    tiles(-1.0, 0.2, 11, LIGHT_TILE),
    tiles(-1.4, 0.2, 11, LIGHT_TILE),
    tiles(1.5, 0.2, 11, LIGHT_TILE),
    tiles(1.3, 0.0, 11, LIGHT_TILE),
    tiles(1.0, 0.0, 11, LIGHT_TILE),
    // edge rows: one light tile at the front, dark behind it
    tiles(-1.2, 0.0, 1, LIGHT_TILE),
    tiles(-1.2, -0.4, 10, DARK_TILE),
    tiles(1.5, 0.0, 1, LIGHT_TILE),
    tiles(1.5, -0.4, 10, DARK_TILE),
    tiles(-1.5, 0.0, 1, LIGHT_TILE),
    tiles(-1.5, -0.4, 10, DARK_TILE),
    tiles(-1.3, 0.2, 1, LIGHT_TILE),
    tiles(-1.3, -0.2, 10, DARK_TILE),
    tiles(1.3, 0.2, 1, LIGHT_TILE),
    tiles(1.3, -0.2, 10, DARK_TILE),
    // chairs
    Placement::single(Prototype::Chair, at(0.5, -0.7, 0.95))
        .repeated(at(0.0, 0.0, -2.0), 3)
        .scaled(at(1.3, 1.0, 0.7)),
    // the front table leans slightly, the two behind it stand straight
    Placement::single(Prototype::Table, at(0.6, -0.2, 1.0))
        .scaled(at(0.7, 0.6, 0.5))
        .tilted(at(3.0, -1.0, 0.0)),
    Placement::single(Prototype::Table, at(0.6, -0.2, -1.0))
        .repeated(at(0.0, 0.0, -2.0), 2)
        .scaled(at(0.7, 0.6, 0.5)),
    // bench, its rail and the shelves above
    block(at(-0.9, -0.4, -3.0), at(0.4, 0.7, 10.0), TABLE_TOP),
    block(at(-1.0, 0.0, -3.0), at(0.8, 0.1, 10.0), [0.0, 0.0, 0.0, 0.0]),
    block(at(-1.3, 1.1, -3.0), at(0.3, 0.1, 10.0), DARK_TILE),
    block(at(-1.3, 0.5, -3.0), at(0.3, 0.1, 10.0), DARK_TILE),
    block(at(-1.3, 0.85, -3.0), at(0.3, 0.1, 10.0), DARK_TILE),
    // back wall and board
    block(at(-1.6, -1.1, -5.0), at(8.0, 7.0, 1.0), [0.7, 0.0, 0.7, 1.0]),
    block(at(-0.1, 0.5, -2.5), at(0.6, 0.6, 1.0), [0.1, 0.0, 0.4, 0.0]),
    // side walls
    block(at(-2.3, -1.0, -5.5), at(1.0, 7.0, 16.0), [0.5, 0.0, 0.5, 1.0]),
    block(at(1.7, -1.0, -4.5), at(0.5, 7.0, 16.0), [0.4, 0.0, 0.4, 1.0]),
    // tools
    Placement::single(Prototype::Tool, at(-0.6, 0.2, 1.3)).repeated(at(0.0, 0.0, -0.9), 5),
];

pub fn room_instance_count(placements: &[Placement]) -> usize {
    placements.iter().map(Placement::instance_count).sum()
}

/// Expand `placements` under the interactive scene transform.
pub fn build_instances_from(placements: &[Placement], controls: &ModelControls) -> Vec<InstanceData> {
    let mut out = Vec::with_capacity(room_instance_count(placements));
    let parent = controls.scene_matrix();
    let spin = controls.spin_y();
    for placement in placements {
        placement.expand_into(parent, spin, &mut out);
    }
    out
}

pub fn build_instances(controls: &ModelControls) -> Vec<InstanceData> {
    build_instances_from(ROOM, controls)
}
