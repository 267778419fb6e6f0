use crate::input::{InputError, Palette, PointerSet};

/// Platform-neutral pointer events in canvas pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    MouseDown,
    MouseMove { x: f32, y: f32 },
    MouseUp,
    TouchStart { slot: usize, id: u64, x: f32, y: f32 },
    TouchMove { slot: usize, x: f32, y: f32 },
    TouchEnd { slot: usize },
}

/// Turns input events into pointer state the simulation consumes.
///
/// Mouse and touch displacement are scaled by the same factor.
#[derive(Clone, Debug)]
pub struct PointerInput {
    pointers: PointerSet,
    palette: Palette,
    displacement_scale: f32,
}

impl PointerInput {
    pub fn new(displacement_scale: f32) -> Self {
        Self {
            pointers: PointerSet::new(),
            palette: Palette::default(),
            displacement_scale,
        }
    }

    pub fn pointers(&self) -> &PointerSet {
        &self.pointers
    }

    pub fn pointers_mut(&mut self) -> &mut PointerSet {
        &mut self.pointers
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<(), InputError> {
        let scale = self.displacement_scale;
        match event {
            InputEvent::MouseDown => {
                let color = self.palette.next_color();
                self.pointers.mouse_mut().press(color);
            }
            InputEvent::MouseMove { x, y } => {
                self.pointers.mouse_mut().move_to(x, y, scale);
            }
            InputEvent::MouseUp => self.pointers.mouse_mut().release(),
            InputEvent::TouchStart { slot, id, x, y } => {
                let color = self.palette.next_color();
                self.pointers.touch(slot, id)?.press_at(x, y, color);
            }
            InputEvent::TouchMove { slot, x, y } => {
                if let Some(pointer) = self.pointers.existing_touch(slot)? {
                    pointer.move_to(x, y, scale);
                }
            }
            InputEvent::TouchEnd { slot } => {
                if let Some(pointer) = self.pointers.existing_touch(slot)? {
                    pointer.release();
                }
            }
        }
        Ok(())
    }
}
