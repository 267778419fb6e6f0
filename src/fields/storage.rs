use crate::{
    fields::{DoubleField, SingleField},
    graphics::{
        ChannelFormat, FilterMode, GraphicsError, RenderDevice, TextureDesc,
    },
    logging::PrettyList,
};

/// Owns every field the simulation touches.
///
/// All fields share one extent which is fixed when storage is allocated.
pub struct FieldStorage {
    /// 2 channels, texels per second.
    pub velocity: DoubleField,

    /// 4 channels, the dye shown on screen.
    pub density: DoubleField,

    /// 1 channel, recomputed from velocity every frame.
    pub divergence: SingleField,

    /// 1 channel, carried between frames as the starting guess for the
    /// next solve.
    pub pressure: DoubleField,

    extent: (u32, u32),
}

impl FieldStorage {
    /// Allocate every field at the given simulation resolution.
    ///
    /// Channel formats are negotiated against the device so a field may get
    /// more channels than it asked for. Passes only ever read the leading
    /// channels.
    pub fn allocate(
        device: &mut impl RenderDevice,
        extent: (u32, u32),
    ) -> Result<Self, GraphicsError> {
        let capabilities = device.capabilities().clone();
        let vector = capabilities.negotiate(ChannelFormat::RG)?;
        let color = capabilities.negotiate(ChannelFormat::RGBA)?;
        let scalar = capabilities.negotiate(ChannelFormat::R)?;

        let summary = [
            format!("velocity: RG -> {:?}, linear, double", vector),
            format!("density: RGBA -> {:?}, linear, double", color),
            format!("divergence: R -> {:?}, nearest, single", scalar),
            format!("pressure: R -> {:?}, nearest, double", scalar),
        ];
        log::info!(
            "Allocating {}x{} simulation fields{}",
            extent.0,
            extent.1,
            PrettyList(&summary)
        );

        Ok(Self {
            velocity: DoubleField::allocate(
                device,
                TextureDesc::new(
                    "velocity",
                    extent,
                    vector,
                    FilterMode::Linear,
                ),
            )?,
            density: DoubleField::allocate(
                device,
                TextureDesc::new("density", extent, color, FilterMode::Linear),
            )?,
            divergence: SingleField::allocate(
                device,
                TextureDesc::new(
                    "divergence",
                    extent,
                    scalar,
                    FilterMode::Nearest,
                ),
            )?,
            pressure: DoubleField::allocate(
                device,
                TextureDesc::new(
                    "pressure",
                    extent,
                    scalar,
                    FilterMode::Nearest,
                ),
            )?,
            extent,
        })
    }

    pub fn extent(&self) -> (u32, u32) {
        self.extent
    }

    /// The size of one texel in texture coordinates.
    pub fn texel_size(&self) -> [f32; 2] {
        [1.0 / self.extent.0 as f32, 1.0 / self.extent.1 as f32]
    }
}
