//! Static SVG export of compiled scripts and playback frames.

use crate::config::SvgStyle;
use scribe_core::Frame;
use scribe_types::{Num, OrchestratorInstruction, ParsedScript, PathInstruction, ViewBox};
use std::fmt::Write;

/// The finished board: every path of `script`, fully drawn.
pub fn render_svg(script: &ParsedScript, style: &SvgStyle) -> String {
    let mut svg = open_svg(script.view_box, style);
    for path in script.paths() {
        write_path(&mut svg, path, style, false);
    }
    svg.push_str("</svg>\n");
    svg
}

/// One moment of playback. The animating path, if any, is emitted last
/// and marked with `data-animating="true"`.
pub fn render_frame_svg(
    frame: &Frame,
    instructions: &[OrchestratorInstruction],
    view_box: Option<ViewBox>,
    style: &SvgStyle,
) -> String {
    let mut svg = open_svg(view_box, style);
    let drawn = frame.drawn.iter().map(|index| (index, false));
    let animating = frame.animating.iter().map(|index| (index, true));
    for (index, is_animating) in drawn.chain(animating) {
        if let Some(path) = instructions.get(*index).and_then(OrchestratorInstruction::as_path) {
            write_path(&mut svg, path, style, is_animating);
        }
    }
    svg.push_str("</svg>\n");
    svg
}

fn open_svg(view_box: Option<ViewBox>, style: &SvgStyle) -> String {
    let mut svg =
        String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%""#);
    if let Some(view_box) = view_box {
        let _ = write!(svg, r#" viewBox="{}""#, view_box);
    }
    svg.push_str(">\n");
    if let Some(background) = &style.background {
        let _ = writeln!(
            svg,
            r#"  <rect x="-50%" y="-50%" width="200%" height="200%" fill="{}"/>"#,
            escape_attr(background)
        );
    }
    svg
}

fn write_path(svg: &mut String, path: &PathInstruction, style: &SvgStyle, animating: bool) {
    let stroke = path.stroke.as_deref().unwrap_or(&style.stroke);
    let fill = path.fill.as_deref().unwrap_or(&style.fill);
    let width = path.stroke_width.unwrap_or(style.stroke_width);
    let _ = write!(
        svg,
        r#"  <path d="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" fill="{}""#,
        escape_attr(&path.d),
        escape_attr(stroke),
        Num(width),
        escape_attr(fill)
    );
    if animating {
        svg.push_str(r#" data-animating="true""#);
    }
    svg.push_str("/>\n");
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> ParsedScript {
        ParsedScript {
            instructions: vec![
                OrchestratorInstruction::Speak {
                    text: "hi".to_string(),
                },
                PathInstruction::stroke("M 0 0 L 10 10").into(),
                PathInstruction {
                    d: "M 0 0 L 5 0 L 5 5 Z".to_string(),
                    stroke: None,
                    fill: Some("rgba(0,255,0,0.3)".to_string()),
                    stroke_width: Some(1.5),
                }
                .into(),
            ],
            view_box: Some(ViewBox {
                min_x: -30.0,
                min_y: -30.0,
                width: 70.0,
                height: 70.0,
            }),
        }
    }

    #[test]
    fn renders_every_path_with_defaults() {
        let svg = render_svg(&script(), &SvgStyle::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"viewBox="-30 -30 70 70""#));
        assert!(svg.contains(
            r##"<path d="M 0 0 L 10 10" stroke="#FFFFFF" stroke-width="4" stroke-linecap="round" fill="none"/>"##
        ));
        assert!(svg.contains(r#"fill="rgba(0,255,0,0.3)""#));
        assert!(svg.contains(r#"stroke-width="1.5""#));
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn missing_view_box_is_omitted() {
        let mut script = script();
        script.view_box = None;
        let svg = render_svg(&script, &SvgStyle::default());
        assert!(!svg.contains("viewBox"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let script = ParsedScript {
            instructions: vec![PathInstruction::stroke(r#"M 0 0" onload="x"#).into()],
            view_box: None,
        };
        let svg = render_svg(&script, &SvgStyle::default().with_background("#000"));
        assert!(svg.contains("&quot; onload=&quot;x"));
        assert!(svg.contains(r##"fill="#000"/>"##));
    }

    #[test]
    fn frame_marks_the_animating_path() {
        let script = script();
        let frame = Frame {
            drawn: vec![1],
            animating: Some(2),
        };
        let svg = render_frame_svg(
            &frame,
            &script.instructions,
            script.view_box,
            &SvgStyle::default(),
        );
        assert_eq!(svg.matches("<path ").count(), 2);
        assert_eq!(svg.matches(r#"data-animating="true""#).count(), 1);
        let animating_at = svg.find("data-animating");
        let second_path_at = svg.rfind("<path ");
        assert!(animating_at > second_path_at);
    }
}
