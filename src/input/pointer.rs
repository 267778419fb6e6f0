use crate::{input::InputError, math::Vec2};

/// The maximum number of simultaneous contacts, including the mouse.
pub const MAX_POINTERS: usize = 10;

/// The mouse always occupies this slot.
pub const MOUSE_SLOT: usize = 0;

/// The number of touch contacts which can be tracked alongside the mouse.
pub const TOUCH_SLOTS: usize = MAX_POINTERS - 1;

/// The state of one contact.
///
/// Positions are in canvas pixels with y growing downward, the way window
/// systems report them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub id: u64,
    pub position: Vec2,

    /// Scaled displacement between the last two reported positions.
    pub delta: Vec2,

    /// Set by a move while pressed, cleared when the simulation consumes it.
    pub moved: bool,
    pub down: bool,

    /// Paint colour, each channel within [0, 1].
    pub color: [f32; 3],
}

impl Pointer {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            position: Vec2::zeros(),
            delta: Vec2::zeros(),
            moved: false,
            down: false,
            color: [1.0, 1.0, 1.0],
        }
    }

    /// Start a contact at the given position with the given colour.
    ///
    /// The position jumps without producing any displacement.
    pub fn press_at(&mut self, x: f32, y: f32, color: [f32; 3]) {
        self.position = Vec2::new(x, y);
        self.delta = Vec2::zeros();
        self.press(color);
    }

    pub fn press(&mut self, color: [f32; 3]) {
        self.down = true;
        self.color = color.map(|c| c.clamp(0.0, 1.0));
    }

    pub fn release(&mut self) {
        self.down = false;
    }

    /// Record a new position. Only movement while pressed marks the pointer
    /// as moved.
    pub fn move_to(&mut self, x: f32, y: f32, scale: f32) {
        let next = Vec2::new(x, y);
        self.delta = (next - self.position) * scale;
        self.position = next;
        self.moved = self.down;
    }

    /// Clear the moved flag, returning whether it was set.
    pub fn take_moved(&mut self) -> bool {
        std::mem::replace(&mut self.moved, false)
    }
}

/// Every contact the simulation knows about, indexed by slot.
///
/// Slot 0 is the mouse and is always occupied. Touch contacts occupy the
/// remaining slots and are reused by index rather than removed.
#[derive(Clone, Debug)]
pub struct PointerSet {
    slots: [Option<Pointer>; MAX_POINTERS],
}

impl Default for PointerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSet {
    pub fn new() -> Self {
        let mut slots = [None; MAX_POINTERS];
        slots[MOUSE_SLOT] = Some(Pointer::new(0));
        Self { slots }
    }

    pub fn mouse(&self) -> &Pointer {
        self.slots[MOUSE_SLOT]
            .as_ref()
            .unwrap_or_else(|| unreachable!("the mouse slot is never vacated"))
    }

    pub fn mouse_mut(&mut self) -> &mut Pointer {
        self.slots[MOUSE_SLOT]
            .get_or_insert_with(|| Pointer::new(0))
    }

    pub fn get(&self, slot: usize) -> Option<&Pointer> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Pointer> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Get the pointer for a touch slot, creating it on first contact.
    pub fn touch(
        &mut self,
        touch_slot: usize,
        id: u64,
    ) -> Result<&mut Pointer, InputError> {
        let slot = Self::touch_index(touch_slot)?;
        let pointer = self.slots[slot].get_or_insert_with(|| Pointer::new(id));
        pointer.id = id;
        Ok(pointer)
    }

    /// Get an existing touch pointer.
    pub fn existing_touch(
        &mut self,
        touch_slot: usize,
    ) -> Result<Option<&mut Pointer>, InputError> {
        let slot = Self::touch_index(touch_slot)?;
        Ok(self.slots[slot].as_mut())
    }

    /// The number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pointer> + '_ {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pointer> + '_ {
        self.slots.iter_mut().flatten()
    }

    fn touch_index(touch_slot: usize) -> Result<usize, InputError> {
        if touch_slot < TOUCH_SLOTS {
            Ok(touch_slot + 1)
        } else {
            Err(InputError::TouchSlotOutOfRange {
                slot: touch_slot,
                capacity: TOUCH_SLOTS,
            })
        }
    }
}
