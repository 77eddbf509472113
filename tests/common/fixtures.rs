use serde_json::{Value, json};

/// The worked circle-theorem lesson: text, circles, lines, arcs and pauses.
pub fn circle_theorem() -> Value {
    json!([
        {"command": "drawText", "payload": {"text": "Let's start with a circle and a center point 'O'.", "x": 20, "y": 40, "fontSize": 18}},
        {"command": "drawCircle", "payload": {"cx": 200, "cy": 250, "r": 100}},
        {"command": "drawText", "payload": {"text": "O", "x": 195, "y": 245, "fontSize": 16}},
        {"command": "pause", "payload": {"duration": 750}},
        {"command": "drawLine", "payload": {"x1": 200, "y1": 250, "x2": 129, "y2": 179}},
        {"command": "drawLine", "payload": {"x1": 200, "y1": 250, "x2": 271, "y2": 179}},
        {"command": "drawArc", "payload": {"cx": 200, "cy": 250, "r": 25, "startAngle": 225, "endAngle": 315}},
        {"command": "drawEquation", "payload": {"equation": "2θ", "x": 190, "y": 210, "charSize": 16}},
        {"command": "pause", "payload": {"duration": 750}},
        {"command": "drawText", "payload": {"text": "∠AOB = 2 * ∠APB", "x": 20, "y": 450, "fontSize": 18}}
    ])
}

/// Equations exercising every markup construct.
pub fn algebra() -> Value {
    json!([
        {"command": "drawEquation", "payload": {"equation": "x = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}", "x": 40, "y": 80, "charSize": 24}},
        {"command": "pause", "payload": {"duration": 500}},
        {"command": "drawEquation", "payload": {"equation": "A = \\begin{bmatrix} 1 & 2 \\\\ 3 & 4 \\end{bmatrix}", "x": 40, "y": 200}},
        {"command": "drawMatrix", "payload": {"data": [["a", "b"], ["c", "d"]], "x": 300, "y": 160, "cellSize": 20}},
        {"command": "drawShape", "payload": {"d": "M 0 0 L 900 900", "fill": "rgba(255,0,0,0.3)"}}
    ])
}
