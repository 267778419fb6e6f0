use crate::graphics::{
    GraphicsError, RenderDevice, TextureDesc, TextureSlot,
};

/// Two equal-shape storage slots with read and write roles.
///
/// `write()` always returns the slot `read()` does not, so a pass bound to
/// `read()` and rendering into `write()` can never alias its input.
#[derive(Clone, Debug)]
pub struct DoubleField {
    slot_a: TextureSlot,
    slot_b: TextureSlot,
    read_is_a: bool,
    desc: TextureDesc,
}

impl DoubleField {
    pub fn allocate(
        device: &mut impl RenderDevice,
        desc: TextureDesc,
    ) -> Result<Self, GraphicsError> {
        let slot_a = device.create_texture(&desc)?;
        let slot_b = device.create_texture(&desc)?;
        Ok(Self::from_slots(slot_a, slot_b, desc))
    }

    /// Wrap two distinct, already allocated slots. `slot_a` starts as the
    /// read side.
    pub fn from_slots(
        slot_a: TextureSlot,
        slot_b: TextureSlot,
        desc: TextureDesc,
    ) -> Self {
        assert_ne!(slot_a, slot_b, "a double field needs two distinct slots");
        Self {
            slot_a,
            slot_b,
            read_is_a: true,
            desc,
        }
    }

    pub fn read(&self) -> TextureSlot {
        if self.read_is_a {
            self.slot_a
        } else {
            self.slot_b
        }
    }

    pub fn write(&self) -> TextureSlot {
        if self.read_is_a {
            self.slot_b
        } else {
            self.slot_a
        }
    }

    /// Make the most recently written slot the read side.
    pub fn swap(&mut self) {
        self.read_is_a = !self.read_is_a;
    }

    pub fn desc(&self) -> &TextureDesc {
        &self.desc
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphics::{ChannelFormat, FilterMode};

    fn field() -> DoubleField {
        DoubleField::from_slots(
            TextureSlot::from_raw(7),
            TextureSlot::from_raw(8),
            TextureDesc::new(
                "velocity",
                (2, 2),
                ChannelFormat::RG,
                FilterMode::Linear,
            ),
        )
    }

    #[test]
    fn read_and_write_never_alias() {
        let mut field = field();
        for _ in 0..5 {
            assert_ne!(field.read(), field.write());
            field.swap();
        }
    }

    #[test]
    fn swap_exchanges_roles() {
        let mut field = field();
        let (read, write) = (field.read(), field.write());
        field.swap();
        assert_eq!(field.read(), write);
        assert_eq!(field.write(), read);
    }

    #[test]
    fn swap_twice_restores_roles() {
        let mut field = field();
        let before = (field.read(), field.write());
        field.swap();
        field.swap();
        assert_eq!((field.read(), field.write()), before);
    }

    #[test]
    #[should_panic]
    fn identical_slots_are_rejected() {
        let slot = TextureSlot::from_raw(1);
        DoubleField::from_slots(slot, slot, field().desc().clone());
    }
}
