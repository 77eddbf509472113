/// Minimal structural check for path data: known commands, whole argument
/// groups, finite numbers, and a leading moveto.
pub fn assert_valid_path(d: &str) {
    let tokens: Vec<&str> = d
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    assert!(!tokens.is_empty(), "empty path data");
    assert!(
        matches!(tokens[0], "M" | "m"),
        "path must start with a moveto: {d}"
    );

    let mut command = None;
    let mut args = 0usize;
    let mut check_group = |command: Option<char>, args: usize| {
        if let Some(cmd) = command {
            let arity = arity(cmd);
            let complete = if arity == 0 {
                args == 0
            } else {
                args > 0 && args % arity == 0
            };
            assert!(complete, "command {cmd} has {args} arguments in {d}");
        }
    };

    for token in tokens {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphabetic() {
                assert!(
                    "MmLlHhVvCcSsAaZz".contains(c),
                    "unknown path command {c} in {d}"
                );
                check_group(command, args);
                command = Some(c);
                args = 0;
                continue;
            }
        }
        let value: f64 = token
            .parse()
            .unwrap_or_else(|_| panic!("bad number {token:?} in {d}"));
        assert!(value.is_finite(), "non-finite number in {d}");
        args += 1;
    }
    check_group(command, args);
}

fn arity(command: char) -> usize {
    match command.to_ascii_uppercase() {
        'M' | 'L' => 2,
        'H' | 'V' => 1,
        'C' => 6,
        'S' => 4,
        'A' => 7,
        _ => 0,
    }
}
