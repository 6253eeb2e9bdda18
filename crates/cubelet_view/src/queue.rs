use std::collections::VecDeque;

use cubelet_core::{CubeState, Move};
use cubelet_prefs::AnimationPreferences;
use web_time::Duration;

use crate::animations::TwistAnimation;
use crate::grip::LayerGrip;

/// Serial queue of programmatic moves. Each move animates and commits before
/// the next one starts.
#[derive(Debug, Default, Clone)]
pub struct MoveQueue {
    /// Moves that have not started yet.
    pending: VecDeque<Move>,
    /// Move currently animating.
    current: Option<TwistAnimation>,
}
impl MoveQueue {
    /// Appends a move to the end of the queue.
    pub fn push(&mut self, mv: Move) {
        self.pending.push_back(mv);
    }

    /// Returns whether a move is animating or waiting to start.
    pub fn is_playing(&self) -> bool {
        self.current.is_some() || !self.pending.is_empty()
    }

    /// Returns the number of moves that have not yet been committed.
    pub fn len(&self) -> usize {
        self.pending.len() + self.current.is_some() as usize
    }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the move currently animating.
    pub fn current(&self) -> Option<&TwistAnimation> {
        self.current.as_ref()
    }

    /// Removes all moves, including the one animating.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.current = None;
    }

    /// Steps the current move forward, starting the next one if nothing is
    /// animating and `can_start` is true. Returns the move to commit once its
    /// animation finishes.
    pub fn proceed(
        &mut self,
        delta: Duration,
        cube: &CubeState,
        prefs: &AnimationPreferences,
        can_start: bool,
    ) -> Option<Move> {
        if self.current.is_none() && can_start {
            let mv = self.pending.pop_front()?;
            log::trace!("starting queued move {mv}");
            let grip = LayerGrip::new(cube, mv.axis(), mv.layer());
            self.current = Some(TwistAnimation::new(
                grip,
                0.0,
                mv.turns().into(),
                prefs.twist_duration,
                prefs.twist_interpolation,
            ));
        }

        let anim = self.current.as_mut()?;
        if anim.proceed(delta) {
            self.current.take().and_then(|anim| anim.commit)
        } else {
            None
        }
    }
}
