mod common;

use common::fixtures::circle_theorem;
use common::{TestResult, compile_json, init_logger};
use scribe::traits::{Generation, Narrator, Renderer, Timer, TimerHandle};
use scribe::{
    Frame, PlaybackState, Player, PlayerConfig, PathInstruction, Sequencer, SvgStyle,
    render_frame_svg,
};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn lesson_plays_every_stroke_and_line_once() -> TestResult {
    init_logger();
    let script = compile_json(&circle_theorem())?;
    let stroke = Duration::from_millis(20);
    let player = Player::new(PlayerConfig::default().with_min_stroke_duration(stroke));

    let report = player.run(&script, 1).await?;
    assert!(report.completed);
    assert_eq!(report.spoken.len(), 4);
    assert_eq!(report.spoken[0], "Let's start with a circle and a center point 'O'.");
    let expected_strokes: Vec<usize> = script
        .instructions
        .iter()
        .enumerate()
        .filter(|(_, i)| i.as_path().is_some())
        .map(|(index, _)| index)
        .collect();
    assert_eq!(report.strokes, expected_strokes);

    let minimum = stroke * report.strokes.len() as u32 + Duration::from_millis(1500);
    assert!(report.elapsed >= minimum, "finished too early: {:?}", report.elapsed);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn controls_sent_between_runs_do_not_reach_the_next_one() -> TestResult {
    let script = compile_json(&circle_theorem())?;
    let player = Player::new(PlayerConfig::default().with_ms_per_unit(0.1));
    let handle = player.handle();
    let first = player.run(&script, 1).await?;
    assert!(handle.replay(2));
    assert!(handle.stop());

    let second = player.run(&script, 3).await?;
    assert!(second.completed);
    assert_eq!(second.strokes, first.strokes);
    assert_eq!(second.spoken, first.spoken);
    Ok(())
}

/// Capabilities that only remember what they were asked to do.
#[derive(Default)]
struct Recorder {
    rendered: Vec<(usize, Generation)>,
    spoken: Vec<String>,
    timers: Vec<(TimerHandle, Generation)>,
}

#[derive(Default)]
struct Screen(Recorder);
#[derive(Default)]
struct Voice(Recorder);
#[derive(Default)]
struct Clock(Recorder);

impl Renderer for Screen {
    fn render(&mut self, index: usize, _path: &PathInstruction, generation: Generation) {
        self.0.rendered.push((index, generation));
    }
}

impl Narrator for Voice {
    fn speak(&mut self, text: &str) {
        self.0.spoken.push(text.to_string());
    }
}

impl Timer for Clock {
    fn set_timer(&mut self, _duration: Duration, generation: Generation) -> TimerHandle {
        let handle = TimerHandle(self.0.timers.len() as u64);
        self.0.timers.push((handle, generation));
        handle
    }

    fn cancel_timer(&mut self, _handle: TimerHandle) {}
}

#[test]
fn frames_render_progressively() -> TestResult {
    let script = compile_json(&circle_theorem())?;
    let mut sequencer = Sequencer::new(Screen::default(), Voice::default(), Clock::default());
    sequencer.load(script.instructions.clone(), 0);

    let mut previous_drawn = 0;
    let mut steps = 0;
    while !sequencer.is_done() {
        let frame = sequencer.frame();
        assert!(frame.drawn.len() >= previous_drawn);
        previous_drawn = frame.drawn.len();

        let svg = render_frame_svg(
            &frame,
            sequencer.instructions(),
            script.view_box,
            &SvgStyle::default(),
        );
        let expected = frame.drawn.len() + usize::from(frame.animating.is_some());
        assert_eq!(svg.matches("<path ").count(), expected);

        let generation = sequencer.generation();
        let advanced = match frame.animating {
            Some(_) => sequencer.on_render_complete(generation),
            None => sequencer.on_timer_fired(generation),
        };
        assert!(advanced, "stuck in {:?}", sequencer.state());
        steps += 1;
    }

    assert_eq!(sequencer.state(), PlaybackState::Done);
    assert_eq!(steps, script.paths().count() + 2);
    let last = sequencer.frame();
    assert_eq!(
        last,
        Frame {
            drawn: (0..script.instructions.len())
                .filter(|i| script.instructions[*i].as_path().is_some())
                .collect(),
            animating: None,
        }
    );
    assert_eq!(sequencer.narrator().0.spoken.len(), 4);
    assert_eq!(sequencer.timer().0.timers.len(), 2);
    Ok(())
}
