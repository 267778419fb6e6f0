use std::ffi::c_void;

use glfw::Context;

use super::WindowError;
use crate::software::Surface;

const GL_RGBA: u32 = 0x1908;
const GL_UNSIGNED_BYTE: u32 = 0x1401;

type WindowPos2i = unsafe extern "system" fn(x: i32, y: i32);
type DrawPixels = unsafe extern "system" fn(
    width: i32,
    height: i32,
    format: u32,
    kind: u32,
    pixels: *const c_void,
);

/// Copies the software surface into the window's default framebuffer.
///
/// The surface rows are bottom-up, which is the order glDrawPixels reads
/// them in, so no flip is needed.
pub struct Presenter {
    window_pos: WindowPos2i,
    draw_pixels: DrawPixels,
}

impl Presenter {
    /// Load the GL entry points from the window's current context.
    pub fn load(window: &mut glfw::Window) -> Result<Self, WindowError> {
        window.make_current();
        // SAFETY: both symbols are looked up by their GL names and the
        // function types match the GL signatures.
        unsafe {
            Ok(Self {
                window_pos: load_fn(window, "glWindowPos2i")?,
                draw_pixels: load_fn(window, "glDrawPixels")?,
            })
        }
    }

    pub fn present(&self, surface: &Surface) {
        let (width, height) = surface.extent();
        if width == 0 || height == 0 {
            return;
        }
        // SAFETY: the pixel slice holds exactly width * height RGBA8 texels
        // and outlives the call, glDrawPixels copies before returning.
        unsafe {
            (self.window_pos)(0, 0);
            (self.draw_pixels)(
                width as i32,
                height as i32,
                GL_RGBA,
                GL_UNSIGNED_BYTE,
                surface.as_bytes().as_ptr().cast(),
            );
        }
    }
}

/// Look up a GL function and reinterpret it as `F`.
///
/// # Safety
///
/// `F` must be a function pointer type matching the named GL function.
unsafe fn load_fn<F: Copy>(
    window: &mut glfw::Window,
    name: &'static str,
) -> Result<F, WindowError> {
    let proc_address = window.get_proc_address(name);
    let raw: *const c_void = std::mem::transmute_copy(&proc_address);
    if raw.is_null() {
        return Err(WindowError::MissingGlFunction(name));
    }
    Ok(std::mem::transmute_copy::<*const c_void, F>(&raw))
}
