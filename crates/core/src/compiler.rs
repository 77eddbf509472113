//! Turns a drawing script into the flat instruction list the sequencer
//! plays, plus the window that frames everything drawn.

use scribe_layout::{
    LayoutConfig, MarkupLayout, arc_path, circle_path, line_path, matrix_dimensions, matrix_paths,
};
use scribe_types::{
    DrawCommand, OrchestratorInstruction, ParsedScript, PathInstruction, Point, ViewBox,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompilerConfig {
    /// Glyph size for text and equations that give neither `charSize` nor
    /// `fontSize`. Defaults to `20`.
    pub default_glyph_size: f64,
    /// Margin added on every side of the accumulated bounds. Defaults to `30`.
    pub view_padding: f64,
    pub layout: LayoutConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            default_glyph_size: 20.0,
            view_padding: 30.0,
            layout: LayoutConfig::default(),
        }
    }
}

impl CompilerConfig {
    pub fn with_default_glyph_size(mut self, size: f64) -> Self {
        self.default_glyph_size = size;
        self
    }

    pub fn with_view_padding(mut self, padding: f64) -> Self {
        self.view_padding = padding;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

/// Running union of every rectangle a script draws into.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }
}

/// Geometry that is non-finite, or overflows once derived, cannot be
/// drawn.
fn is_drawable(command: &DrawCommand, geometry: &[f64]) -> bool {
    let finite = geometry.iter().all(|v| v.is_finite());
    if !finite {
        log::warn!("Skipping {} with non-finite geometry {:?}", command.name(), geometry);
    }
    finite
}

impl Extent {
    fn include(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            log::debug!("Skipping non-finite bounds ({x}, {y}, {width}, {height})");
            return;
        }
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x + width);
        self.max_y = self.max_y.max(y + height);
    }

    fn view_box(&self, padding: f64) -> Option<ViewBox> {
        let finite = [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite());
        finite.then(|| ViewBox {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            width: (self.max_x - self.min_x) + padding * 2.0,
            height: (self.max_y - self.min_y) + padding * 2.0,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptCompiler {
    config: CompilerConfig,
    layout: MarkupLayout,
}

impl ScriptCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CompilerConfig) -> Self {
        Self {
            config,
            layout: MarkupLayout::new(config.layout),
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compiles `commands` in order. Never fails: unusable markup just
    /// produces fewer strokes.
    pub fn compile(&self, commands: &[DrawCommand]) -> ParsedScript {
        let mut instructions = Vec::new();
        let mut extent = Extent::default();

        for command in commands {
            log::debug!("Compiling {}", command.name());
            match command {
                DrawCommand::DrawEquation(payload) => self.compile_markup(
                    &payload.equation,
                    Point::new(payload.x, payload.y),
                    payload.glyph_size(self.config.default_glyph_size),
                    &mut instructions,
                    &mut extent,
                ),
                DrawCommand::DrawText(payload) => self.compile_markup(
                    &payload.text,
                    Point::new(payload.x, payload.y),
                    payload.glyph_size(self.config.default_glyph_size),
                    &mut instructions,
                    &mut extent,
                ),
                DrawCommand::DrawLine(line) => {
                    let [x, y, width, height] = [
                        line.x1.min(line.x2),
                        line.y1.min(line.y2),
                        (line.x2 - line.x1).abs(),
                        (line.y2 - line.y1).abs(),
                    ];
                    if is_drawable(command, &[x, y, width, height]) {
                        let d = line_path(line.x1, line.y1, line.x2, line.y2);
                        instructions.push(PathInstruction::stroke(d).into());
                        extent.include(x, y, width, height);
                    }
                }
                DrawCommand::DrawCircle(circle) => {
                    let (x, y, diameter) =
                        (circle.cx - circle.r, circle.cy - circle.r, circle.r * 2.0);
                    if is_drawable(command, &[x, y, diameter]) {
                        let d = circle_path(circle.cx, circle.cy, circle.r);
                        instructions.push(PathInstruction::stroke(d).into());
                        extent.include(x, y, diameter, diameter);
                    }
                }
                DrawCommand::DrawArc(arc) => {
                    let (x, y, diameter) = (arc.cx - arc.r, arc.cy - arc.r, arc.r * 2.0);
                    let geometry = [x, y, diameter, arc.start_angle, arc.end_angle];
                    if is_drawable(command, &geometry) {
                        let d = arc_path(arc.cx, arc.cy, arc.r, arc.start_angle, arc.end_angle);
                        instructions.push(PathInstruction::stroke(d).into());
                        extent.include(x, y, diameter, diameter);
                    }
                }
                DrawCommand::DrawShape(shape) => {
                    // Arbitrary path data is not parsed, so shapes never
                    // contribute to the view box.
                    instructions.push(
                        PathInstruction {
                            d: shape.d.clone(),
                            stroke: shape.stroke.clone(),
                            fill: shape.fill.clone(),
                            stroke_width: shape.stroke_width,
                        }
                        .into(),
                    );
                }
                DrawCommand::DrawMatrix(matrix) => {
                    let origin = Point::new(matrix.x, matrix.y);
                    let dims = matrix_dimensions(&matrix.data, matrix.cell_size);
                    if is_drawable(command, &[matrix.x, matrix.y, dims.width, dims.height]) {
                        instructions.extend(
                            matrix_paths(&matrix.data, origin, matrix.cell_size)
                                .into_iter()
                                .map(|d| PathInstruction::stroke(d).into()),
                        );
                        extent.include(matrix.x, matrix.y, dims.width, dims.height);
                    }
                }
                DrawCommand::Pause(pause) => {
                    instructions.push(OrchestratorInstruction::Pause {
                        duration: pause.duration,
                    });
                }
            }
        }

        let view_box = extent.view_box(self.config.view_padding);
        log::info!(
            "Compiled {} commands into {} instructions, view box {}",
            commands.len(),
            instructions.len(),
            view_box.map_or_else(|| "none".to_string(), |v| v.to_string())
        );
        ParsedScript {
            instructions,
            view_box,
        }
    }

    fn compile_markup(
        &self,
        text: &str,
        origin: Point,
        size: f64,
        instructions: &mut Vec<OrchestratorInstruction>,
        extent: &mut Extent,
    ) {
        if !text.is_empty() {
            instructions.push(OrchestratorInstruction::Speak {
                text: text.to_string(),
            });
        }
        let result = self.layout.layout(text, origin.x, origin.y, size);
        instructions.extend(result.paths.into_iter().map(OrchestratorInstruction::from));

        // Layout bounds are one line tall; pad a line above and below for
        // superscripts, fractions and subscripts.
        let bounds = result.bounds;
        extent.include(
            bounds.min_x,
            bounds.min_y - size,
            bounds.width(),
            bounds.height() + size * 2.0,
        );
    }
}

/// Compiles with [`CompilerConfig::default`].
pub fn compile(commands: &[DrawCommand]) -> ParsedScript {
    ScriptCompiler::default().compile(commands)
}
