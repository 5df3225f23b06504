use crate::settings::{self, Settings};
use crate::utils::*;
use apagito_core as game;
use chrono::prelude::*;
use game::GridGenerator;
use gloo::timers::callback::Interval;
use yew::prelude::*;

fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap()
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    Ready,
    Active,
    Won,
    WonAtStart,
}

impl ViewGameState {
    fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::WonAtStart)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub move_count: u32,
}

impl GameSession {
    fn new(engine: game::PlayEngine) -> Self {
        Self {
            engine,
            started_at: None,
            ended_at: None,
            move_count: 0,
        }
    }

    fn start(config: game::GameConfig, seed: u64) -> Self {
        let grid = game::RandomGridGenerator::new(seed).generate(config);
        Self::new(game::PlayEngine::new(grid))
    }

    fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    fn view_state(&self) -> ViewGameState {
        use game::GameState::*;
        match self.engine.state() {
            Playing if self.move_count == 0 => ViewGameState::Ready,
            Playing => ViewGameState::Active,
            Won if self.move_count == 0 => ViewGameState::WonAtStart,
            Won => ViewGameState::Won,
        }
    }

    fn press(&mut self, coords: game::Coord2, now: DateTime<Utc>) -> bool {
        match self.engine.press(coords) {
            Ok(outcome) => {
                log::debug!("pressed {:?}: {:?}", coords, outcome);
                self.on_successful_move(now);
                if outcome.is_win() {
                    log::info!("all lights out in {} moves", self.move_count);
                }
                true
            }
            Err(err) => {
                log::debug!("press {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn on_successful_move(&mut self, now: DateTime<Utc>) {
        self.move_count = self.move_count.saturating_add(1);

        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        if self.engine.is_won() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellPress(game::Coord2),
    UpdateTime,
    NewGame,
    ToggleSettings,
    UpdateSettings(Settings),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    lit: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        lit,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        lit.then_some("lit"),
        locked.then_some("locked"),
    );

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit((x, y));
            log::trace!("({}, {}) clicked", x, y);
        })
    };

    // Keyboard activation has to match a pointer click.
    let onkeydown = {
        let callback = callback.clone();
        Callback::from(move |e: KeyboardEvent| {
            if matches!(e.key().as_str(), "Enter" | " ") {
                e.prevent_default();
                callback.emit((x, y));
                log::trace!("({}, {}) activated via keyboard", x, y);
            }
        })
    };

    html! {
        <td {class}
            role="button"
            aria-pressed={lit.to_string()}
            tabindex={if locked { "-1" } else { "0" }}
            {onclick}
            {onkeydown}/>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct BoardView {
    settings: Settings,
    game: GameSession,
    prev_time: u32,
    settings_open: bool,
    _timer_interval: Interval,
}

impl BoardView {
    fn get_time(&self) -> u32 {
        self.game.elapsed_secs(utc_now())
    }

    fn get_game_state_class(&self) -> Classes {
        classes!(match self.game.view_state() {
            ViewGameState::Ready => "not-started",
            ViewGameState::Active => "in-progress",
            ViewGameState::Won => "win",
            ViewGameState::WonAtStart => "instant-win",
        })
    }

    fn is_playable(&self) -> bool {
        !self.game.view_state().is_finished()
    }

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(500, move || link.send_message(Msg::UpdateTime))
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings = Settings::local_or_default();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            game: GameSession::start(settings.game_config, seed),
            settings,
            prev_time: 0,
            settings_open: false,
            _timer_interval: BoardView::create_timer(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellPress(pos) => {
                if self.is_playable() {
                    self.game.press(pos, utc_now())
                } else {
                    false
                }
            }
            UpdateTime => {
                let time = self.get_time();
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            NewGame => {
                self.game = GameSession::start(self.settings.game_config, js_random_seed());
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                if !self.settings_open {
                    self.settings = Settings::local_or_default();
                }
                true
            }
            UpdateSettings(settings) => {
                self.settings = settings;
                self.settings_open = false;
                self.game = GameSession::start(self.settings.game_config, js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use settings::SettingsView;
        use Msg::*;

        let (cols, rows) = self.game.engine.size();
        let game_state_class = self.get_game_state_class();
        let is_playable = self.is_playable();
        let lights_left = format_for_counter(self.game.engine.lit_count().into());
        let elapsed_time = format_for_counter(self.get_time() as i32);

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);
        let cb_apply_settings = ctx.link().callback(UpdateSettings);
        let cb_cancel_settings = ctx.link().callback(|_| ToggleSettings);

        html! {
            <div class="apagito">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside>{lights_left}</aside>
                    <span><button class={game_state_class} onclick={cb_new_game}/></span>
                    <aside>{elapsed_time}</aside>
                </nav>
                <table class={is_playable.then_some("playable")}>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (x, y);
                                        let lit = self.game.engine.is_lit(pos);
                                        let callback = ctx.link().callback(Msg::CellPress);
                                        html! {
                                            <CellView {x} {y} {lit} locked={!is_playable} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                {
                    (!is_playable).then(|| html! {
                        <footer class="win-banner">{"You win!"}</footer>
                    })
                }
                <SettingsView open={self.settings_open}
                    onapply={cb_apply_settings}
                    oncancel={cb_cancel_settings}/>
            </div>
        }
    }
}
