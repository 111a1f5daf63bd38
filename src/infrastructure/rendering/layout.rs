use super::backend::ElementType;
use crate::domain::errors::{LayoutError, SandboxResult};

/// How one attribute reads its components out of an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub location: u32,
    pub count: i32,
    pub element_type: ElementType,
    pub normalized: bool,
    /// Bytes between consecutive vertices
    pub stride: i32,
    /// Byte position of this attribute inside one vertex
    pub offset: i32,
}

/// Describes an interleaved vertex format, one attribute at a time.
///
/// Attributes must be added in the order they appear inside a vertex. The
/// running stride and offset belong to this instance, so independent layouts
/// never see each other's totals.
#[derive(Debug, Clone, Default)]
pub struct VertexLayout {
    location: u32,
    entries: Vec<LayoutEntry>,
    stride: i32,
    offset: i32,
}

impl VertexLayout {
    /// A layout whose [`add_layout`](Self::add_layout) calls target `location`.
    pub fn new(location: u32) -> Self {
        Self { location, ..Self::default() }
    }

    /// Append `count` components of `element_type` at the default location.
    pub fn add_layout(&mut self, count: i32, element_type: ElementType, normalized: bool) -> SandboxResult<&mut Self> {
        self.add_attribute(self.location, count, element_type, normalized)
    }

    /// Append `count` components of `element_type` at `location`.
    pub fn add_attribute(
        &mut self,
        location: u32,
        count: i32,
        element_type: ElementType,
        normalized: bool,
    ) -> SandboxResult<&mut Self> {
        if !(1..=4).contains(&count) {
            return Err(LayoutError::InvalidComponentCount(count).into());
        }
        let size = count * element_type.size_in_bytes();

        self.stride += size;
        self.entries.push(LayoutEntry {
            location,
            count,
            element_type,
            normalized,
            stride: 0,
            offset: self.offset,
        });
        self.offset += size;

        let stride = self.stride;
        for entry in &mut self.entries {
            entry.stride = stride;
        }
        Ok(self)
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
