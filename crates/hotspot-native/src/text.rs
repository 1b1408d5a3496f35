//! Tooltip label text, drawn with glyphon in the overlay pass.

use glyphon::{
    Attrs, Buffer as TextBuffer, Cache, Color as GlyphonColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonRenderer, Viewport,
};
use hotspot_core::{
    TooltipLayout, TOOLTIP_FONT_SIZE, TOOLTIP_LINE_HEIGHT, TOOLTIP_TEXT_COLOR,
};

/// Label to draw this frame: the text and the tooltip it belongs to.
pub struct TooltipLabel<'a> {
    pub text: &'a str,
    pub layout: TooltipLayout,
}

pub struct LabelRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    atlas: TextAtlas,
    viewport: Viewport,
    renderer: GlyphonRenderer,
    buffer: TextBuffer,
    shaped: Option<String>,
}

impl LabelRenderer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let mut font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let viewport = Viewport::new(device, &cache);
        let renderer =
            GlyphonRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);
        let buffer = TextBuffer::new(
            &mut font_system,
            Metrics::new(TOOLTIP_FONT_SIZE, TOOLTIP_LINE_HEIGHT),
        );
        Self {
            font_system,
            swash_cache,
            atlas,
            viewport,
            renderer,
            buffer,
            shaped: None,
        }
    }

    /// Reshape only when the label changes.
    fn shape(&mut self, text: &str, width: f32) {
        if self.shaped.as_deref() == Some(text) {
            return;
        }
        self.buffer.set_size(
            &mut self.font_system,
            Some(width),
            Some(TOOLTIP_LINE_HEIGHT),
        );
        self.buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(Family::SansSerif),
            Shaping::Advanced,
        );
        self.buffer.shape_until_scroll(&mut self.font_system, false);
        self.shaped = Some(text.to_owned());
    }

    fn text_width(&self) -> f32 {
        self.buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }

    /// Upload glyphs for `label` sized for a `width` x `height` target.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        label: &TooltipLabel<'_>,
    ) {
        self.viewport.update(queue, Resolution { width, height });
        let bounds = label.layout.label_bounds();
        self.shape(label.text, bounds.w);
        let origin = label.layout.label_origin(self.text_width(), TOOLTIP_LINE_HEIGHT);
        let [left, top, right, bottom] = bounds.pixel_bounds();
        let [r, g, b, a] = TOOLTIP_TEXT_COLOR;

        let area = TextArea {
            buffer: &self.buffer,
            left: origin.x,
            top: origin.y,
            scale: 1.0,
            bounds: TextBounds {
                left,
                top,
                right,
                bottom,
            },
            default_color: GlyphonColor::rgba(r, g, b, a),
            custom_glyphs: &[],
        };
        self.renderer
            .prepare(
                device,
                queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                [area],
                &mut self.swash_cache,
            )
            .unwrap_or_else(|e| log::warn!("glyphon prepare error: {e:?}"));
    }

    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        self.renderer
            .render(&self.atlas, &self.viewport, pass)
            .unwrap_or_else(|e| log::warn!("glyphon render error: {e:?}"));
    }

    /// Drop atlas entries unused since the last prepare.
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}
