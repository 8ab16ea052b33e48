use crate::http::HttpSource;
use crate::utils::*;
use clap::Args;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::rc::Rc;
use trivio_core as trivia;
use trivia::{
    BoardConfig, CellContent, CellId, GridLayout, RoundController, RoundPhase, RoundTicket,
};
use yew::prelude::*;

pub(crate) const DEFAULT_BASE_URL: &str = "https://jservice.io/api";

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Hidden,
    Question,
    Answer,
}

impl From<CellContent<'_>> for ViewCellState {
    fn from(content: CellContent<'_>) -> Self {
        match content {
            CellContent::Placeholder => Self::Hidden,
            CellContent::Question(_) => Self::Question,
            CellContent::Answer(_) => Self::Answer,
        }
    }
}

fn cell_class(cell_state: ViewCellState) -> Classes {
    use ViewCellState::*;

    classes!(
        "clue",
        match cell_state {
            Hidden => classes!(),
            Question => classes!("question"),
            // answered cells don't react to clicks anymore
            Answer => classes!("answer", "locked"),
        }
    )
}

#[derive(Clone, Debug)]
pub(crate) enum Msg {
    StartRound,
    RoundLoaded(RoundTicket, trivia::Result<trivia::Board>),
    Reveal(CellId),
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    cell: CellId,
    cell_state: ViewCellState,
    text: String,
    callback: Callback<CellId>,
}

#[function_component(ClueCell)]
fn clue_cell_component(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        cell,
        cell_state,
        text,
        callback,
    } = props.clone();

    let class = cell_class(cell_state);
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        callback.emit(cell);
    });

    html! {
        <td {class} {onclick}>
            {
                match cell_state {
                    ViewCellState::Hidden => html! { <i class="placeholder">{text}</i> },
                    _ => html! { <>{text}</> },
                }
            }
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct RoundProps {
    /// Base URL of the trivia service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Categories on the board
    #[arg(long, default_value_t = 6)]
    pub categories: usize,

    /// Clues per category
    #[arg(long, default_value_t = 5)]
    pub clues: usize,

    /// Catalog entries to pick categories from
    #[arg(long, default_value_t = 99)]
    pub catalog_size: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl RoundProps {
    pub(crate) fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.categories, self.clues)
            .and_then(|config| config.with_catalog_size(self.catalog_size))
            .unwrap_or_else(|err| {
                log::warn!("{}, falling back to the default board", err);
                BoardConfig::default()
            })
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: RoundController,
    source: Rc<HttpSource>,
    config: BoardConfig,
    seed: Option<u64>,
}

impl GameView {
    fn round_seed(&self, ticket: RoundTicket) -> u64 {
        self.seed
            .map_or_else(js_random_seed, |seed| seed.wrapping_add(ticket.round()))
    }

    fn start_round(&mut self, ctx: &Context<Self>) -> bool {
        if self.controller.is_loading() {
            return false;
        }

        let ticket = self.controller.begin();
        let seed = self.round_seed(ticket);
        let source = Rc::clone(&self.source);
        let config = self.config;
        log::debug!("round {} seed: {}", ticket.round(), seed);

        ctx.link().send_future(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = trivia::build_board(&*source, &config, &mut rng).await;
            Msg::RoundLoaded(ticket, result)
        });
        true
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GridProps {
    pub board: trivia::Board,
    pub on_reveal: Callback<CellId>,
}

#[function_component(GridView)]
pub(crate) fn grid_component(props: &GridProps) -> Html {
    let grid = GridLayout::from_board(&props.board);

    html! {
        <table id="jeopardy">
            <thead>
                <tr>
                    {
                        for grid.header.iter().enumerate().map(|(i, title)| html! {
                            <th id={format!("cat-{}", i)}>{title.to_string()}</th>
                        })
                    }
                </tr>
            </thead>
            <tbody>
                {
                    for grid.rows.iter().map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|cell| {
                                    let cell_state = ViewCellState::from(cell.content);
                                    let text = cell.content.text().to_string();
                                    html! {
                                        <ClueCell
                                            cell={cell.id}
                                            {cell_state}
                                            {text}
                                            callback={props.on_reveal.clone()}
                                        />
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct RoundViewProps {
    pub phase: RoundPhase,
    pub on_start: Callback<()>,
    pub on_reveal: Callback<CellId>,
}

/// Start/restart control, error line and the board of the current round.
#[function_component(RoundView)]
pub(crate) fn round_component(props: &RoundViewProps) -> Html {
    let RoundViewProps {
        phase,
        on_start,
        on_reveal,
    } = props.clone();

    let loading = phase.is_loading();
    let label = phase.status_label();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        on_start.emit(());
    });

    let body = match phase {
        RoundPhase::Playing(board) => html! { <GridView {board} {on_reveal}/> },
        RoundPhase::Failed(err) => html! {
            <p class="error" role="alert">{err.to_string()}</p>
        },
        RoundPhase::Idle | RoundPhase::Loading => html! {},
    };

    html! {
        <div class={classes!("trivio", loading.then_some("loading"))}>
            <nav>
                <button id="start" {onclick} disabled={loading}>{label}</button>
            </nav>
            {body}
        </div>
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = RoundProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            controller: RoundController::new(),
            source: Rc::new(HttpSource::new(props.base_url.clone())),
            config: props.board_config(),
            seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartRound => self.start_round(ctx),
            RoundLoaded(ticket, result) => self.controller.finish(ticket, result).has_update(),
            Reveal(cell) => match self.controller.reveal(cell) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::error!("could not reveal {}: {}", cell, err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let phase = self.controller.phase().clone();
        let on_start = ctx.link().callback(|()| Msg::StartRound);
        let on_reveal = ctx.link().callback(Msg::Reveal);

        html! {
            <RoundView {phase} {on_start} {on_reveal}/>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(categories: usize, clues: usize, catalog_size: usize) -> RoundProps {
        RoundProps {
            base_url: DEFAULT_BASE_URL.to_string(),
            categories,
            clues,
            catalog_size,
            seed: None,
        }
    }

    #[test]
    fn cell_state_follows_content() {
        assert_eq!(
            ViewCellState::from(CellContent::Placeholder),
            ViewCellState::Hidden
        );
        assert_eq!(
            ViewCellState::from(CellContent::Question("2+2")),
            ViewCellState::Question
        );
        assert_eq!(
            ViewCellState::from(CellContent::Answer("4")),
            ViewCellState::Answer
        );
    }

    #[test]
    fn only_answers_get_answer_style() {
        assert!(!cell_class(ViewCellState::Hidden).contains("answer"));
        assert!(cell_class(ViewCellState::Question).contains("question"));
        let answered = cell_class(ViewCellState::Answer);
        assert!(answered.contains("answer"));
        assert!(answered.contains("locked"));
    }

    #[test]
    fn board_config_uses_props() {
        let config = props(4, 3, 50).board_config();

        assert_eq!(config.categories, 4);
        assert_eq!(config.clues_per_category, 3);
        assert_eq!(config.catalog_size, 50);
    }

    #[test]
    fn invalid_props_fall_back_to_default_board() {
        assert_eq!(props(0, 5, 99).board_config(), BoardConfig::default());
        assert_eq!(props(6, 5, 2).board_config(), BoardConfig::default());
    }
}
