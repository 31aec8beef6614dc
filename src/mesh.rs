//! Triangle mesh storage and the Wavefront OBJ subset loader.
//!
//! A [`Mesh`] owns three parallel attribute arrays (positions, texture
//! coordinates, normals) plus the indexed faces that tie them together.
//! Everything is populated once at load time and read-only afterwards.
//!
//! Only the line kinds the pipeline consumes are interpreted: `v`, `vt`,
//! `vn` and triangulated `f` records with full `pos/tex/norm` corners.
//! Materials, groups and smoothing directives are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Errors that can occur while loading a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("malformed {kind} record on line {line}")]
    Malformed { kind: &'static str, line: usize },

    #[error("face {face} references out-of-range {attribute} index {index}")]
    IndexOutOfRange {
        face: usize,
        attribute: &'static str,
        index: usize,
    },
}

/// One corner of a face: indices into the three attribute arrays.
///
/// Indices are zero-based; the OBJ source's one-based indices are
/// converted during parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Corner {
    pub position: usize,
    pub texcoord: usize,
    pub normal: usize,
}

/// A triangular face of three indexed corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub corners: [Corner; 3],
}

/// An indexed triangle mesh with per-vertex positions, texture
/// coordinates and normals.
pub struct Mesh {
    positions: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Load a mesh from an OBJ file on disk.
    pub fn from_obj_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse a mesh from any buffered OBJ text source.
    ///
    /// Face indices are validated against the attribute array lengths once
    /// the whole source has been read, so record order does not matter.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut mesh = Self {
            positions: Vec::new(),
            texcoords: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        };

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let mut fields = line.split_whitespace();

            match fields.next() {
                Some("v") => {
                    mesh.positions.push(parse_vec3(fields, "v", line_number)?);
                }
                Some("vt") => {
                    // A third texture component, if present, is ignored.
                    mesh.texcoords.push(parse_vec2(fields, "vt", line_number)?);
                }
                Some("vn") => {
                    mesh.normals.push(parse_vec3(fields, "vn", line_number)?);
                }
                Some("f") => {
                    mesh.faces.push(parse_face(fields, line_number)?);
                }
                // Comments and unrecognized directives are skipped.
                _ => {}
            }
        }

        mesh.validate_indices()?;
        Ok(mesh)
    }

    /// Check that every face index is in range for its attribute array.
    ///
    /// The OBJ format indexes from one, so a source index of 0 has already
    /// been rejected during parsing; this catches indices past the end.
    fn validate_indices(&self) -> Result<(), LoadError> {
        for (face_index, face) in self.faces.iter().enumerate() {
            for corner in &face.corners {
                let checks = [
                    ("position", corner.position, self.positions.len()),
                    ("texcoord", corner.texcoord, self.texcoords.len()),
                    ("normal", corner.normal, self.normals.len()),
                ];
                for (attribute, index, len) in checks {
                    if index >= len {
                        return Err(LoadError::IndexOutOfRange {
                            face: face_index,
                            attribute,
                            index,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

fn parse_scalar<T: FromStr>(
    field: Option<&str>,
    kind: &'static str,
    line: usize,
) -> Result<T, LoadError> {
    field
        .and_then(|s| s.parse().ok())
        .ok_or(LoadError::Malformed { kind, line })
}

fn parse_vec2<'a, I: Iterator<Item = &'a str>>(
    mut fields: I,
    kind: &'static str,
    line: usize,
) -> Result<Vec2, LoadError> {
    let x = parse_scalar(fields.next(), kind, line)?;
    let y = parse_scalar(fields.next(), kind, line)?;
    Ok(Vec2::new(x, y))
}

fn parse_vec3<'a, I: Iterator<Item = &'a str>>(
    mut fields: I,
    kind: &'static str,
    line: usize,
) -> Result<Vec3, LoadError> {
    let x = parse_scalar(fields.next(), kind, line)?;
    let y = parse_scalar(fields.next(), kind, line)?;
    let z = parse_scalar(fields.next(), kind, line)?;
    Ok(Vec3::new(x, y, z))
}

fn parse_face<'a, I: Iterator<Item = &'a str>>(
    mut fields: I,
    line: usize,
) -> Result<Face, LoadError> {
    let mut corners = [Corner {
        position: 0,
        texcoord: 0,
        normal: 0,
    }; 3];
    for corner in &mut corners {
        let field = fields.next().ok_or(LoadError::Malformed { kind: "f", line })?;
        *corner = parse_corner(field, line)?;
    }
    Ok(Face { corners })
}

/// Parse one `position/texcoord/normal` corner, converting each one-based
/// index to zero-based. An index of 0 has no zero-based equivalent and is
/// rejected as malformed.
fn parse_corner(field: &str, line: usize) -> Result<Corner, LoadError> {
    let mut indices = field.split('/').map(|s| {
        s.parse::<usize>()
            .ok()
            .and_then(|one_based| one_based.checked_sub(1))
    });
    let mut next_index = || {
        indices
            .next()
            .flatten()
            .ok_or(LoadError::Malformed { kind: "f", line })
    };
    Ok(Corner {
        position: next_index()?,
        texcoord: next_index()?,
        normal: next_index()?,
    })
}
