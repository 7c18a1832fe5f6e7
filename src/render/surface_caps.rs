// Surface configuration choices, free of device state so host tests can
// include this file.

/// Colors are authored as display values and written as-is by the shader,
/// so prefer a plain UNORM target that does not gamma-encode them again.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| {
            matches!(
                f,
                wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
            )
        })
        .or_else(|| formats.iter().copied().find(|f| !f.is_srgb()))
        .or_else(|| formats.first().copied())
}

/// The background sits over page content, so keep the canvas see-through.
pub fn pick_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    modes
        .iter()
        .copied()
        .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
