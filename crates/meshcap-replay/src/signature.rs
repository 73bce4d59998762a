//! Shader output-signature reflection data.
//!
//! A signature is the ordered list of values a shader stage writes. The
//! replay backend reflects it out of the capture; the decoder uses it to plan
//! the layout of post-shader vertex data.

use crate::format::CompType;

/// Shader stage within the captured pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader.
    Vertex,
    /// Hull (tessellation control) shader.
    Hull,
    /// Domain (tessellation evaluation) shader.
    Domain,
    /// Geometry shader.
    Geometry,
    /// Pixel shader.
    Pixel,
}

/// System-value semantic attached to a signature entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemValue {
    /// No system-value semantic; a plain user varying.
    None,
    /// Clip-space position output.
    Position,
    /// Point sprite size.
    PointSize,
    /// User clip distance.
    ClipDistance,
    /// User cull distance.
    CullDistance,
    /// Render-target array index.
    RenderTargetIndex,
    /// Viewport array index.
    ViewportIndex,
}

/// One entry in a shader stage's output signature, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParameter {
    /// Variable name from shader debug info. May be empty if the capture
    /// carries no debug names.
    pub var_name: String,
    /// Base semantic name (e.g. `"TEXCOORD"`).
    pub semantic_name: String,
    /// Semantic index (e.g. `3` for `TEXCOORD3`).
    pub semantic_index: u32,
    /// Component numeric interpretation. Reflection only ever reports
    /// [`CompType::Uint`], [`CompType::Sint`], [`CompType::Float`] or
    /// [`CompType::Double`] here.
    pub comp_type: CompType,
    /// Number of components written (1–4).
    pub comp_count: u8,
    /// System-value semantic, if any.
    pub system_value: SystemValue,
}

impl SignatureParameter {
    /// The indexed semantic name, e.g. `"TEXCOORD3"`.
    ///
    /// Used as the attribute name when [`Self::var_name`] is empty.
    pub fn semantic_index_name(&self) -> String {
        format!("{}{}", self.semantic_name, self.semantic_index)
    }
}
