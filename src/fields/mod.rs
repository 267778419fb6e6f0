//! Field storage.
//!
//! Every simulation quantity lives in one or two device textures of the same
//! extent. Double-buffered fields expose a read slot and a write slot which
//! can never be the same texture, so a pass can always sample the current
//! value while rendering the next one. Single-buffered fields have no swap.

mod double_field;
mod storage;

use crate::graphics::{
    GraphicsError, RenderDevice, TextureDesc, TextureSlot,
};

pub use self::{double_field::DoubleField, storage::FieldStorage};

/// A field with one storage slot.
///
/// Only suitable for values which are recomputed entirely from other fields
/// each frame.
#[derive(Clone, Debug)]
pub struct SingleField {
    slot: TextureSlot,
    desc: TextureDesc,
}

impl SingleField {
    pub fn allocate(
        device: &mut impl RenderDevice,
        desc: TextureDesc,
    ) -> Result<Self, GraphicsError> {
        let slot = device.create_texture(&desc)?;
        Ok(Self { slot, desc })
    }

    pub fn slot(&self) -> TextureSlot {
        self.slot
    }

    pub fn desc(&self) -> &TextureDesc {
        &self.desc
    }
}
