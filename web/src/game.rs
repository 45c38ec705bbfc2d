use bitflags::bitflags;
use clap::Args;
use lightsout_core as game;
use yew::prelude::*;

/// Seed drawn from JavaScript's Math.random, so every board differs between page loads.
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let half = || (random() * f64::from(u32::MAX)) as u64;
    (half() << 32) | half()
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    Playing,
    Won,
    /// Solved before the first move.
    WonAtStart,
}

impl ViewGameState {
    fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::WonAtStart)
    }

    fn message(self) -> Option<&'static str> {
        match self {
            Self::Playing => None,
            Self::Won => Some("You Won!"),
            Self::WonAtStart => Some("Lucky board! You Won!"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
}

impl GameSession {
    fn new(config: game::GameConfig, seed: u64) -> game::Result<Self> {
        Ok(Self {
            engine: game::PlayEngine::new(config, seed)?,
        })
    }

    fn view_state(&self) -> ViewGameState {
        use game::EngineState::*;
        match self.engine.state() {
            Playing => ViewGameState::Playing,
            Won if self.engine.move_count() == 0 => ViewGameState::WonAtStart,
            Won => ViewGameState::Won,
        }
    }

    fn activate(&mut self, coords: game::Coord2) -> Option<game::FlipOutcome> {
        self.engine
            .activate(coords)
            .inspect_err(|err| log::warn!("activation at {:?} rejected: {}", coords, err))
            .ok()
    }

    fn reset(&mut self, seed: u64) -> bool {
        match self.engine.reset(seed) {
            Ok(state) => {
                log::debug!("new board, state: {:?}", state);
                true
            }
            Err(err) => {
                log::error!("could not reset board: {}", err);
                false
            }
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellPointerState {
    pos: game::Coord2,
    buttons: MouseButtons,
}

impl CellPointerState {
    /// A cell is activated by releasing the primary button over the cell it was last held on.
    fn released(held: Option<Self>, release: Self) -> Option<game::Coord2> {
        match held {
            Some(Self {
                pos,
                buttons: MouseButtons::LEFT,
            }) if release.buttons.is_empty() && pos == release.pos => Some(pos),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Update(CellPointerState),
    Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(CellMsg),
    Reset,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    lit: bool,
    #[prop_or_default]
    pressed: bool,
    callback: Callback<CellMsg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        lit,
        pressed,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        lit.then_some("lit"),
        pressed.then_some("pressed")
    );

    let pointer_callback = |event_name: &'static str| {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            let pointer_state = CellPointerState {
                pos: (row, col),
                buttons,
            };
            callback.emit(CellMsg::Update(pointer_state));
            log::trace!("({}, {}) mouse {} ({:?})", row, col, event_name, buttons);
        })
    };
    let onmousedown = pointer_callback("down");
    let onmouseup = pointer_callback("up");
    let onmouseenter = pointer_callback("enter");

    let onmouseleave = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit(CellMsg::Leave);
            log::trace!("({}, {}) mouse leave", row, col);
        })
    };

    html! {
        <td {class} {onmousedown} {onmouseup} {onmouseenter} {onmouseleave}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Number of rows on the board
    #[arg(long, default_value_t = 5)]
    rows: game::Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = 5)]
    cols: game::Coord,

    /// Chance of any cell starting lit, between 0 and 1
    #[arg(long, default_value_t = 0.25)]
    chance_lit: f64,

    /// Force a seed for the first board instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new((self.rows, self.cols), self.chance_lit).unwrap_or_else(|err| {
            log::warn!("{}, falling back to the default board", err);
            game::GameConfig::default()
        })
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    current_cell_state: Option<CellPointerState>,
}

impl GameView {
    fn is_pressed(&self, coords: game::Coord2) -> bool {
        if self.session.view_state().is_finished() {
            return false;
        }

        matches!(
            self.current_cell_state,
            Some(CellPointerState {
                pos,
                buttons: MouseButtons::LEFT,
            }) if pos == coords
        )
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.session.engine.size();
        let callback = ctx.link().callback(Msg::CellEvent);

        html! {
            <table class="board">
                {
                    for (0..rows).map(|row| html! {
                        <tr>
                            {
                                for (0..cols).map(|col| {
                                    let pos = (row, col);
                                    let lit = self.session.engine.is_lit(pos);
                                    let pressed = self.is_pressed(pos);
                                    let callback = callback.clone();
                                    html! {
                                        <CellView {row} {col} {lit} {pressed} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = props.game_config();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("config: {:?}, seed: {}", config, seed);

        let session = GameSession::new(config, seed)
            .or_else(|err| {
                log::warn!("{}, falling back to the default board", err);
                GameSession::new(game::GameConfig::default(), seed)
            })
            .expect("default config must be valid");

        Self {
            session,
            current_cell_state: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use CellMsg::*;
        use Msg::*;

        match msg {
            CellEvent(Leave) => {
                log::trace!("cell leave");
                self.current_cell_state.take().is_some()
            }
            CellEvent(Update(cell_state)) if cell_state.buttons.is_empty() => {
                let held = self.current_cell_state.take();
                match CellPointerState::released(held, cell_state) {
                    Some(pos) => {
                        log::debug!("activate cell: {:?}", pos);
                        if let Some(game::FlipOutcome::Won) = self.session.activate(pos) {
                            log::info!("solved in {} moves", self.session.engine.move_count());
                        }
                        // the held cell repaints even when the move was refused
                        true
                    }
                    None => held.is_some(),
                }
            }
            CellEvent(Update(cell_state)) => {
                log::trace!("cell update: {:?}", cell_state);
                self.current_cell_state.replace(cell_state) != Some(cell_state)
            }
            Reset => {
                self.current_cell_state = None;
                self.session.reset(js_random_seed())
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view_state = self.session.view_state();
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <div class="lightsout" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                if let Some(message) = view_state.message() {
                    <h1 class="win-message">{message}</h1>
                } else {
                    {self.view_board(ctx)}
                }
                <button class="reset" onclick={cb_reset}>{"RESET"}</button>
            </div>
        }
    }
}
