//! Pieces module - the static piece catalog
//!
//! Every shape is an ordered list of rotation masks. A mask is a square
//! occupancy grid (1 = occupied) read row-major; 3x3 for J, L, T, Z and S,
//! 4x4 for the long piece and the 2x2 block. List order is the rotation
//! cycle: the rotate move walks forward through it and wraps around.
//!
//! The catalog is immutable and shared. Piece instances refer to it by
//! kind and rotation index, so no instance ever owns or mutates a mask.

use crate::types::PieceKind;

/// One orientation of a shape
pub type Mask = &'static [&'static [u8]];

/// Static definition of a piece shape
#[derive(Debug)]
pub struct Shape {
    pub kind: PieceKind,
    pub rotations: &'static [Mask],
}

impl Shape {
    /// Number of distinct states in the rotation cycle
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Mask for a rotation index (wraps modulo the cycle length)
    pub fn mask(&self, rotation: usize) -> Mask {
        self.rotations[rotation % self.rotations.len()]
    }

    /// Side length of this shape's masks
    pub fn size(&self) -> usize {
        self.rotations[0].len()
    }

    /// Symbol drawn for this shape's cells
    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }
}

const J_0: Mask = &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]];
const J_1: Mask = &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]];
const J_2: Mask = &[&[0, 0, 0], &[1, 0, 0], &[1, 1, 1]];
const J_3: Mask = &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]];

const L_0: Mask = &[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]];
const L_1: Mask = &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]];
const L_2: Mask = &[&[0, 0, 0], &[0, 0, 1], &[1, 1, 1]];
const L_3: Mask = &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]];

const T_0: Mask = &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]];
const T_1: Mask = &[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]];
const T_2: Mask = &[&[0, 0, 0], &[0, 1, 0], &[1, 1, 1]];
const T_3: Mask = &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]];

const Z_0: Mask = &[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]];
const Z_1: Mask = &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]];

const S_0: Mask = &[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]];
const S_1: Mask = &[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]];

const I_0: Mask = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
const I_1: Mask = &[&[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]];

const O_0: Mask = &[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]];

static J_SHAPE: Shape = Shape {
    kind: PieceKind::J,
    rotations: &[J_0, J_1, J_2, J_3],
};

static L_SHAPE: Shape = Shape {
    kind: PieceKind::L,
    rotations: &[L_0, L_1, L_2, L_3],
};

static T_SHAPE: Shape = Shape {
    kind: PieceKind::T,
    rotations: &[T_0, T_1, T_2, T_3],
};

// Z and S keep four states so the cycle length matches the other 3x3 shapes.
static Z_SHAPE: Shape = Shape {
    kind: PieceKind::Z,
    rotations: &[Z_0, Z_1, Z_0, Z_1],
};

static S_SHAPE: Shape = Shape {
    kind: PieceKind::S,
    rotations: &[S_0, S_1, S_0, S_1],
};

static I_SHAPE: Shape = Shape {
    kind: PieceKind::I,
    rotations: &[I_0, I_1],
};

static O_SHAPE: Shape = Shape {
    kind: PieceKind::O,
    rotations: &[O_0],
};

/// Look up the catalog entry for a piece kind
pub fn shape(kind: PieceKind) -> &'static Shape {
    match kind {
        PieceKind::J => &J_SHAPE,
        PieceKind::L => &L_SHAPE,
        PieceKind::T => &T_SHAPE,
        PieceKind::Z => &Z_SHAPE,
        PieceKind::S => &S_SHAPE,
        PieceKind::I => &I_SHAPE,
        PieceKind::O => &O_SHAPE,
    }
}

/// Count of occupied cells in a mask
pub fn mask_cell_count(mask: Mask) -> usize {
    mask.iter()
        .map(|row| row.iter().filter(|&&v| v != 0).count())
        .sum()
}
