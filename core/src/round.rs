use rand::Rng;

use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub enum RoundPhase {
    Idle,
    Loading,
    Playing(Board),
    Failed(TriviaError),
}

impl RoundPhase {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Text for the start/restart control.
    pub const fn status_label(&self) -> &'static str {
        match self {
            Self::Idle => "Start Game!",
            Self::Loading => "Game is loading...",
            Self::Playing(_) => "Restart Game!",
            Self::Failed(_) => "Try Again!",
        }
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Proof that a round load was started. Handing it back to [`RoundController::finish`] is the
/// only way out of [`RoundPhase::Loading`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "the round stays loading until the ticket is finished"]
pub struct RoundTicket {
    round: u64,
}

impl RoundTicket {
    pub const fn round(self) -> u64 {
        self.round
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FinishOutcome {
    Ready,
    Failed,
    /// A newer round was started in the meantime; the result was dropped.
    Stale,
}

impl FinishOutcome {
    pub const fn has_update(self) -> bool {
        use FinishOutcome::*;
        match self {
            Ready => true,
            Failed => true,
            Stale => false,
        }
    }
}

/// Owns the board of the current round and sequences start, load and play.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundController {
    phase: RoundPhase,
    round: u64,
}

impl RoundController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn board(&self) -> Option<&Board> {
        match &self.phase {
            RoundPhase::Playing(board) => Some(board),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&TriviaError> {
        match &self.phase {
            RoundPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn grid(&self) -> Option<GridLayout<'_>> {
        self.board().map(GridLayout::from_board)
    }

    /// Drops whatever the previous round had and enters the loading phase.
    pub fn begin(&mut self) -> RoundTicket {
        self.round += 1;
        self.phase = RoundPhase::Loading;
        log::debug!("round {} loading", self.round);
        RoundTicket { round: self.round }
    }

    /// Leaves the loading phase with the build result of `ticket`'s round.
    pub fn finish(&mut self, ticket: RoundTicket, result: Result<Board>) -> FinishOutcome {
        if ticket.round != self.round || !self.phase.is_loading() {
            log::debug!(
                "dropping result of round {}, current round is {}",
                ticket.round,
                self.round
            );
            return FinishOutcome::Stale;
        }

        match result {
            Ok(board) => {
                log::debug!(
                    "round {} ready with {} categories",
                    ticket.round,
                    board.category_count()
                );
                self.phase = RoundPhase::Playing(board);
                FinishOutcome::Ready
            }
            Err(err) => {
                log::error!("round {} failed: {}", ticket.round, err);
                self.phase = RoundPhase::Failed(err);
                FinishOutcome::Failed
            }
        }
    }

    /// Loads a whole round in one go.
    pub async fn play_round<S, R>(
        &mut self,
        source: &S,
        config: &BoardConfig,
        rng: &mut R,
    ) -> FinishOutcome
    where
        S: TriviaSource + ?Sized,
        R: Rng + ?Sized,
    {
        let ticket = self.begin();
        let result = build_board(source, config, rng).await;
        self.finish(ticket, result)
    }

    /// Clicks are only meaningful while a board is in play; otherwise nothing happens.
    pub fn reveal(&mut self, cell: CellId) -> Result<RevealOutcome> {
        match &mut self.phase {
            RoundPhase::Playing(board) => {
                let outcome = board.reveal(cell)?;
                log::trace!("reveal {}: {:?}", cell, outcome);
                Ok(outcome)
            }
            _ => Ok(RevealOutcome::NoChange),
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.phase.status_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn load(controller: &mut RoundController, source: &MemorySource, seed: u64) -> FinishOutcome {
        let mut rng = SmallRng::seed_from_u64(seed);
        run_ready(controller.play_round(source, &BoardConfig::default(), &mut rng))
    }

    #[test]
    fn starts_idle_without_board() {
        let controller = RoundController::new();

        assert_eq!(controller.phase(), &RoundPhase::Idle);
        assert_eq!(controller.status_label(), "Start Game!");
        assert!(controller.grid().is_none());
    }

    #[test]
    fn successful_round_clears_loading() {
        let source = MemorySource::with_categories(1..=99, 5);
        let mut controller = RoundController::new();

        let ticket = controller.begin();
        assert!(controller.is_loading());
        assert_eq!(controller.status_label(), "Game is loading...");

        let mut rng = SmallRng::seed_from_u64(0);
        let result = run_ready(build_board(&source, &BoardConfig::default(), &mut rng));
        assert_eq!(controller.finish(ticket, result), FinishOutcome::Ready);

        assert!(!controller.is_loading());
        assert_eq!(controller.status_label(), "Restart Game!");
        assert_eq!(controller.board().unwrap().category_count(), 6);
    }

    #[test]
    fn failed_round_clears_loading_and_keeps_error() {
        let mut source = MemorySource::with_categories(1..=99, 5);
        source.fail_catalog = true;
        let mut controller = RoundController::new();

        assert_eq!(load(&mut controller, &source, 0), FinishOutcome::Failed);

        assert!(!controller.is_loading());
        assert!(controller.board().is_none());
        assert_eq!(
            controller.error(),
            Some(&TriviaError::Source("catalog unavailable".to_string()))
        );
        assert_eq!(controller.status_label(), "Try Again!");

        source.fail_catalog = false;
        assert_eq!(load(&mut controller, &source, 0), FinishOutcome::Ready);
        assert!(controller.error().is_none());
    }

    #[test]
    fn stale_result_is_dropped() {
        let source = MemorySource::with_categories(1..=99, 5);
        let mut controller = RoundController::new();
        let mut rng = SmallRng::seed_from_u64(9);

        let first = controller.begin();
        let second = controller.begin();
        let first_board = run_ready(build_board(&source, &BoardConfig::default(), &mut rng));
        let second_board = run_ready(build_board(&source, &BoardConfig::default(), &mut rng));

        assert_eq!(controller.finish(first, first_board), FinishOutcome::Stale);
        assert!(controller.is_loading());
        let expected = second_board.clone().unwrap();
        assert_eq!(controller.finish(second, second_board), FinishOutcome::Ready);
        assert_eq!(controller.board(), Some(&expected));
        assert_eq!(second.round(), 2);
    }

    #[test]
    fn clicks_walk_cells_forward_and_stop_at_answer() {
        let source = MemorySource::with_categories(1..=99, 5);
        let mut controller = RoundController::new();
        load(&mut controller, &source, 4);
        let cell = CellId::new(3, 2);
        let question = controller.board().unwrap().clue_at(cell).unwrap().question().to_string();
        let answer = controller.board().unwrap().clue_at(cell).unwrap().answer().to_string();

        assert_eq!(controller.reveal(cell).unwrap(), RevealOutcome::QuestionShown);
        assert_eq!(controller.grid().unwrap().cell(cell).unwrap().content.text(), question);

        assert_eq!(controller.reveal(cell).unwrap(), RevealOutcome::AnswerShown);
        assert_eq!(controller.grid().unwrap().cell(cell).unwrap().content.text(), answer);

        assert_eq!(controller.reveal(cell).unwrap(), RevealOutcome::NoChange);
        let grid = controller.grid().unwrap();
        let content = grid.cell(cell).unwrap().content;
        assert_eq!(content.text(), answer);
        assert!(content.is_answer());
    }

    #[test]
    fn new_round_replaces_previous_board() {
        let source = MemorySource::with_categories(1..=99, 5);
        let mut controller = RoundController::new();
        load(&mut controller, &source, 1);
        let cells: Vec<CellId> = controller.board().unwrap().iter_cells().collect();
        for cell in cells {
            controller.reveal(cell).unwrap();
            controller.reveal(cell).unwrap();
        }

        let _ticket = controller.begin();
        assert!(controller.board().is_none());
        assert_eq!(
            controller.reveal(CellId::new(0, 0)).unwrap(),
            RevealOutcome::NoChange
        );

        load(&mut controller, &source, 2);
        let board = controller.board().unwrap();
        assert!(
            board
                .iter_cells()
                .all(|cell| board.clue_at(cell).unwrap().showing() == Showing::Unrevealed)
        );
        assert_eq!(controller.round(), 3);
    }

    #[test]
    fn invalid_cell_is_reported_while_playing() {
        let source = MemorySource::with_categories(1..=99, 5);
        let mut controller = RoundController::new();
        load(&mut controller, &source, 0);

        assert_eq!(
            controller.reveal(CellId::new(6, 0)),
            Err(TriviaError::InvalidCell(CellId::new(6, 0)))
        );
    }
}
