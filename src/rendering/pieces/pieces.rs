//! Piece models built from primitive meshes
//!
//! Each piece type is a short stack of primitives (frustums, spheres, cones,
//! a cube) standing on its square. Meshes are created once at startup and
//! shared; visuals are rebuilt from the board whenever [`ChessGame`] changes.

use crate::game::{ChessGame, GameSystems};
use crate::rendering::utils::{square_translation, BoardMaterials, PIECE_BASE_HEIGHT};
use bevy::prelude::*;
use chess_rules::{BoardPos, PieceColor, PieceType};

/// Primitive making up part of a piece model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Tapered column, vertical axis
    Frustum { bottom: f32, top: f32, height: f32 },
    Cylinder { radius: f32, height: f32 },
    Sphere { radius: f32 },
    Cone { radius: f32, height: f32 },
    Cuboid { x: f32, y: f32, z: f32 },
}

impl PartShape {
    fn mesh(self) -> Mesh {
        match self {
            PartShape::Frustum { bottom, top, height } => ConicalFrustum {
                radius_top: top,
                radius_bottom: bottom,
                height,
            }
            .mesh()
            .build(),
            PartShape::Cylinder { radius, height } => Cylinder::new(radius, height).mesh().build(),
            PartShape::Sphere { radius } => Sphere::new(radius).mesh().uv(32, 18),
            PartShape::Cone { radius, height } => Cone { radius, height }.mesh().build(),
            PartShape::Cuboid { x, y, z } => Cuboid::new(x, y, z).mesh().build(),
        }
    }

    /// Vertical extent, used to place parts on top of each other
    pub fn height(self) -> f32 {
        match self {
            PartShape::Frustum { height, .. }
            | PartShape::Cylinder { height, .. }
            | PartShape::Cone { height, .. } => height,
            PartShape::Sphere { radius } => radius * 2.0,
            PartShape::Cuboid { y, .. } => y,
        }
    }
}

/// A primitive and its centre relative to the piece base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecePart {
    pub shape: PartShape,
    pub offset: Vec3,
    pub rotation: Quat,
}

impl PiecePart {
    /// Part whose base sits at height `base`
    fn stacked(shape: PartShape, base: f32) -> Self {
        Self {
            shape,
            offset: Vec3::Y * (base + shape.height() / 2.0),
            rotation: Quat::IDENTITY,
        }
    }

    /// Part centred at `offset`
    fn centred(shape: PartShape, offset: Vec3) -> Self {
        Self {
            shape,
            offset,
            rotation: Quat::IDENTITY,
        }
    }

    fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    fn with_horizontal(mut self, x: f32, z: f32) -> Self {
        self.offset.x = x;
        self.offset.z = z;
        self
    }
}

/// Model description for a piece type
pub fn piece_parts(piece_type: PieceType) -> Vec<PiecePart> {
    use PartShape::*;

    match piece_type {
        PieceType::Pawn => vec![
            PiecePart::stacked(Frustum { bottom: 0.3, top: 0.2, height: 0.5 }, 0.0),
            PiecePart::centred(Sphere { radius: 0.2 }, Vec3::Y * 0.5),
        ],
        PieceType::Rook => vec![
            PiecePart::stacked(Cylinder { radius: 0.4, height: 0.6 }, 0.0),
            PiecePart::stacked(Frustum { bottom: 0.5, top: 0.3, height: 0.2 }, 0.6),
        ],
        PieceType::Knight => vec![
            PiecePart::stacked(Frustum { bottom: 0.3, top: 0.2, height: 0.35 }, 0.0),
            PiecePart::centred(Cuboid { x: 0.2, y: 0.4, z: 0.35 }, Vec3::new(0.0, 0.5, 0.05))
                .rotated(Quat::from_rotation_x(-0.5)),
            PiecePart::centred(Cuboid { x: 0.18, y: 0.15, z: 0.3 }, Vec3::new(0.0, 0.62, 0.2)),
        ],
        PieceType::Bishop => vec![
            PiecePart::stacked(Frustum { bottom: 0.3, top: 0.1, height: 0.8 }, 0.0),
            PiecePart::centred(Sphere { radius: 0.1 }, Vec3::Y * 0.8),
        ],
        PieceType::Queen => {
            let mut parts = vec![
                PiecePart::stacked(Frustum { bottom: 0.4, top: 0.2, height: 0.6 }, 0.0),
                PiecePart::centred(Sphere { radius: 0.3 }, Vec3::Y * 0.6),
            ];
            let crown = Cone { radius: 0.1, height: 0.3 };
            for (x, z) in [(0.2, 0.0), (0.0, 0.2), (-0.2, 0.0), (0.0, -0.2)] {
                parts.push(PiecePart::stacked(crown, 0.6).with_horizontal(x, z));
            }
            parts
        }
        PieceType::King => vec![
            PiecePart::stacked(Frustum { bottom: 0.4, top: 0.3, height: 0.7 }, 0.0),
            PiecePart::stacked(Frustum { bottom: 0.2, top: 0.1, height: 0.2 }, 0.7),
            PiecePart::centred(Cuboid { x: 0.3, y: 0.3, z: 0.3 }, Vec3::Y * 0.9),
        ],
    }
}

/// Highest point of a model above its base
pub fn piece_height(piece_type: PieceType) -> f32 {
    piece_parts(piece_type)
        .iter()
        .map(|part| part.offset.y + part.shape.height() / 2.0)
        .fold(0.0, f32::max)
}

/// Shared mesh handles per piece type, indexed by [`PieceType::ALL`] order
#[derive(Resource)]
pub struct PieceMeshes {
    models: Vec<Vec<(Handle<Mesh>, Transform)>>,
}

impl PieceMeshes {
    pub fn model(&self, piece_type: PieceType) -> &[(Handle<Mesh>, Transform)] {
        let index = PieceType::ALL
            .iter()
            .position(|&t| t == piece_type)
            .unwrap_or_default();
        &self.models[index]
    }
}

impl FromWorld for PieceMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        let models = PieceType::ALL
            .iter()
            .map(|&piece_type| {
                piece_parts(piece_type)
                    .into_iter()
                    .map(|part| {
                        let transform = Transform::from_translation(part.offset)
                            .with_rotation(part.rotation);
                        (meshes.add(part.shape.mesh()), transform)
                    })
                    .collect()
            })
            .collect();
        Self { models }
    }
}

/// Root entity of a spawned piece model
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceVisual {
    pub pos: BoardPos,
    pub color: PieceColor,
    pub piece_type: PieceType,
}

fn piece_name(color: PieceColor, piece_type: PieceType, pos: BoardPos) -> String {
    format!("{} {:?} {}", color, piece_type, pos)
}

/// Despawn and respawn every piece model from the current board
pub fn sync_piece_visuals(
    mut commands: Commands,
    game: Res<ChessGame>,
    piece_meshes: Res<PieceMeshes>,
    materials: Res<BoardMaterials>,
    existing: Query<Entity, With<PieceVisual>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let mut spawned = 0;
    for (pos, piece) in game.board().pieces() {
        let material = match piece.color {
            PieceColor::White => materials.white_piece.clone(),
            PieceColor::Black => materials.black_piece.clone(),
        };

        commands
            .spawn((
                Transform::from_translation(square_translation(pos.row(), pos.col(), PIECE_BASE_HEIGHT)),
                Visibility::Inherited,
                PieceVisual {
                    pos,
                    color: piece.color,
                    piece_type: piece.piece_type,
                },
                Name::new(piece_name(piece.color, piece.piece_type, pos)),
            ))
            .with_children(|parent| {
                for (mesh, transform) in piece_meshes.model(piece.piece_type) {
                    parent.spawn((
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        *transform,
                    ));
                }
            });
        spawned += 1;
    }
    trace!("[RENDER] Rebuilt {} piece models", spawned);
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PieceMeshes>().add_systems(
            Update,
            sync_piece_visuals
                .in_set(GameSystems::Visual)
                .run_if(resource_changed::<ChessGame>),
        );
    }
}
