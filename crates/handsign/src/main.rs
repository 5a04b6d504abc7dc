//! Classifies recorded hand landmarks.
//!
//! Usage: `handsign [FILE | --demo]`
//!
//! `FILE` (or stdin, if omitted or `-`) contains a JSON array of frames, each listing the hands
//! detected in it:
//!
//! ```json
//! [{ "hands": [[[0.51, 0.92, 0.0], [0.44, 0.85, -0.01], ...]] }]
//! ```
//!
//! Every hand must have 21 `[x, y, z]` landmarks in normalized image coordinates. A landmark may
//! carry the detector's visibility and presence as a 4th and 5th value.

use std::{
    env,
    fs::File,
    io::{self, BufReader, Read},
};

use anyhow::{bail, Context};
use handsign::{
    config::Config,
    gesture::GESTURES,
    overlay::{self, Pixel, Trail},
    synthetic, Finger, FingerStates, Gesture, GestureEstimator, GestureLabel, HandLandmarks,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct Frame {
    hands: Vec<Vec<Vec<f32>>>,
}

fn main() -> anyhow::Result<()> {
    handsign::init_logger!();

    let config = Config::from_env()?;

    let mut args = env::args().skip(1);
    let input = args.next();
    if args.next().is_some() {
        bail!("usage: handsign [FILE | --demo]");
    }

    match input.as_deref() {
        Some("--demo") => demo(),
        None | Some("-") => run(io::stdin().lock(), &config),
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open '{path}'"))?;
            run(BufReader::new(file), &config)
        }
    }
}

fn run(reader: impl Read, config: &Config) -> anyhow::Result<()> {
    let frames = read_frames(reader)?;
    log::debug!("read {} frames", frames.len());

    let mut trail = Trail::new();
    for (frame_index, frame) in frames.iter().enumerate() {
        for hand in classify_frame(frame_index, frame, config, &mut trail) {
            let (x, y) = hand.anchor;
            println!(
                "frame {frame_index} hand {}: {} at ({x}, {y})",
                hand.hand_index, hand.label
            );
        }
    }

    println!(
        "trail: {} points, {} segments at {}",
        trail.len(),
        trail.render(config.resolution).count(),
        config.resolution,
    );
    Ok(())
}

fn read_frames(reader: impl Read) -> anyhow::Result<Vec<Frame>> {
    serde_json::from_reader(reader).context("failed to parse landmark frames")
}

/// A hand that was successfully classified.
#[derive(Debug, PartialEq)]
struct HandReport {
    hand_index: usize,
    label: GestureLabel,
    anchor: Pixel,
}

/// Classifies every hand of a frame and updates the pointing trail.
///
/// Hands with invalid or degenerate landmarks are logged and left out of the result.
fn classify_frame(
    frame_index: usize,
    frame: &Frame,
    config: &Config,
    trail: &mut Trail,
) -> Vec<HandReport> {
    let mut reports = Vec::with_capacity(frame.hands.len());
    for (hand_index, coords) in frame.hands.iter().enumerate() {
        let hand = match HandLandmarks::from_coordinates(coords) {
            Ok(hand) => hand,
            Err(e) => {
                log::warn!("frame {frame_index} hand {hand_index}: {e}; skipping");
                continue;
            }
        };
        let estimator = match GestureEstimator::new(&hand) {
            Ok(estimator) => estimator,
            Err(e) => {
                log::warn!("frame {frame_index} hand {hand_index}: {e}; skipping");
                continue;
            }
        };

        let label = estimator.gesture();
        log::trace!(
            "frame {frame_index} hand {hand_index}: states={} curvature={:?}",
            estimator.finger_states(),
            Finger::ALL.map(|f| estimator.finger_curvature(f)),
        );

        // Only the first hand paints.
        if hand_index == 0 {
            if label.gesture() == Some(Gesture::Pointing) {
                let tip = estimator.pointing_fingertip();
                trail.push(tip.x, tip.y);
            } else {
                trail.clear();
            }
        }

        reports.push(HandReport {
            hand_index,
            label,
            anchor: overlay::label_anchor(&hand, config.resolution, config.label_margin),
        });
    }
    reports
}

fn demo() -> anyhow::Result<()> {
    let poses = GESTURES
        .iter()
        .map(|(_, states)| *states)
        .chain([
            FingerStates::new([false, true, true, true, false]),
            FingerStates::new([false, false, true, true, true]),
        ]);

    for states in poses {
        let hand = synthetic::hand(states);
        let estimator = GestureEstimator::new(&hand)?;
        println!(
            "{states}: {} (pointing {:.1} deg)",
            estimator.gesture(),
            estimator.pointing_direction().to_degrees(),
        );
    }
    Ok(())
}
