use crate::graphics::GraphicsError;

/// The number of packed floating point channels stored per texel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChannelFormat {
    R,
    RG,
    RGBA,
}

impl ChannelFormat {
    pub fn channel_count(self) -> usize {
        match self {
            ChannelFormat::R => 1,
            ChannelFormat::RG => 2,
            ChannelFormat::RGBA => 4,
        }
    }

    /// The next wider format to try when this one cannot be rendered to.
    pub fn fallback(self) -> Option<ChannelFormat> {
        match self {
            ChannelFormat::R => Some(ChannelFormat::RG),
            ChannelFormat::RG => Some(ChannelFormat::RGBA),
            ChannelFormat::RGBA => None,
        }
    }
}

/// How a texture is sampled between texel centers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Everything a device needs to allocate a texture.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureDesc {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub format: ChannelFormat,
    pub filter: FilterMode,
}

impl TextureDesc {
    pub fn new(
        label: impl Into<String>,
        (width, height): (u32, u32),
        format: ChannelFormat,
        filter: FilterMode,
    ) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            format,
            filter,
        }
    }

    pub fn texel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// What the device reported when it was created.
#[derive(Clone, Debug)]
pub struct Capabilities {
    /// Formats which can be used as render targets.
    pub renderable_formats: Vec<ChannelFormat>,

    /// The largest width or height the device can allocate.
    pub max_texture_extent: u32,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            renderable_formats: vec![
                ChannelFormat::R,
                ChannelFormat::RG,
                ChannelFormat::RGBA,
            ],
            max_texture_extent: 8192,
        }
    }
}

impl Capabilities {
    /// Find a renderable format with at least as many channels as requested.
    ///
    /// Narrow formats are often missing on older devices, so the search walks
    /// R -> RG -> RGBA until something renderable turns up.
    pub fn negotiate(
        &self,
        requested: ChannelFormat,
    ) -> Result<ChannelFormat, GraphicsError> {
        let mut candidate = Some(requested);
        while let Some(format) = candidate {
            if self.renderable_formats.contains(&format) {
                return Ok(format);
            }
            candidate = format.fallback();
        }
        Err(GraphicsError::UnsupportedFormat(requested))
    }
}
