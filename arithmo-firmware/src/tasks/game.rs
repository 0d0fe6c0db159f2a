//! Main game task
//!
//! Owns the game context. Feeds it key events and ticks, dispatches the
//! feedback it requests to the buzzer and LED tasks, and rebuilds the
//! shared screen when something visible changed.

use defmt::*;
use embassy_futures::select::{select, Either};

use arithmo_core::config::QuizProfile;
use arithmo_core::feedback::Action;
use arithmo_core::game::GameContext;
use arithmo_core::state::GameState;

use crate::channels::{KEY_CHANNEL, LED_CHANNEL, SCREEN, SCREEN_UPDATE, TONE_CHANNEL};
use crate::display::Renderer;
use crate::tasks::tick::TICK_SIGNAL;

/// Game task - main coordination loop
#[embassy_executor::task]
pub async fn game_task(profile: QuizProfile, seed: u32) {
    info!("Game task started, operands up to {}", profile.operand_max);

    let mut ctx = GameContext::new(profile, seed);
    let mut renderer = Renderer::new();

    // Key events are stamped with the latest tick time; at a 10 ms tick
    // that is well inside both profiles' settle windows
    let mut now_ms: u32 = 0;
    let mut last_frame = FrameKey::default();

    loop {
        let raw = match select(KEY_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(event) => Some(event),
            Either::Second(tick_ms) => {
                now_ms = tick_ms;
                None
            }
        };

        let actions = ctx.step(now_ms, raw);
        for action in actions {
            match action {
                Action::Tone(cmd) => {
                    let _ = TONE_CHANNEL.try_send(cmd);
                }
                Action::Led(cmd) => {
                    let _ = LED_CHANNEL.try_send(cmd);
                }
            }
        }

        let frame = FrameKey::of(&ctx);
        if frame != last_frame {
            last_frame = frame;
            render_current_state(&ctx, &mut renderer).await;
        }
    }
}

/// What the screen depends on; redraw only when it changes
#[derive(Default, PartialEq, Clone, Copy)]
struct FrameKey {
    state: Option<GameState>,
    question: (u16, u16),
    answer_len: usize,
    y: u8,
}

impl FrameKey {
    fn of(ctx: &GameContext) -> Self {
        Self {
            state: Some(ctx.state()),
            question: (ctx.question().a, ctx.question().b),
            answer_len: ctx.answer().len(),
            y: ctx.anim_y() as u8,
        }
    }
}

/// Render the current state to the shared screen
async fn render_current_state(ctx: &GameContext, renderer: &mut Renderer) {
    match ctx.state() {
        // Transient; the same step already moved on to a fresh question
        GameState::GenerateNewQuestion => return,
        GameState::WaitingForInput => {
            renderer.render_question(
                ctx.question().text.as_str(),
                ctx.answer().as_str(),
                ctx.anim_y() as u8,
            );
        }
        GameState::CheckAnswer => match ctx.outcome() {
            Some(outcome) if outcome.correct => renderer.render_correct(),
            Some(outcome) => renderer.render_wrong(outcome),
            None => return,
        },
    }

    let mut screen = SCREEN.lock().await;
    *screen = renderer.screen().clone();
    drop(screen);

    SCREEN_UPDATE.signal(());
}
