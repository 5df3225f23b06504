use crate::theme::Theme;
use crate::utils::*;
use apagito_core as game;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub game_config: game::GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_config: game::GameConfig::default(),
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "apagito:settings:v1";
}

fn parse_input<T: core::str::FromStr>(node: &NodeRef, fallback: T) -> T {
    node.cast::<HtmlInputElement>()
        .and_then(|input| input.value().parse().ok())
        .unwrap_or(fallback)
}

fn theme_switcher(label: &'static str, theme: Option<Theme>) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        Theme::apply(theme);
    });
    html! {
        <li><a href="#" {onclick}>{label}</a></li>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub onapply: Callback<Settings>,
    pub oncancel: Callback<()>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let current = Settings::local_or_default();
    let (cols, rows) = current.game_config.size;

    let cols_ref = use_node_ref();
    let rows_ref = use_node_ref();
    let chance_ref = use_node_ref();

    let onapply = {
        let cols_ref = cols_ref.clone();
        let rows_ref = rows_ref.clone();
        let chance_ref = chance_ref.clone();
        let onapply = props.onapply.clone();
        Callback::from(move |_: MouseEvent| {
            let stored = Settings::local_or_default();
            let (stored_cols, stored_rows) = stored.game_config.size;
            let game_config = game::GameConfig::new(
                (
                    parse_input(&cols_ref, stored_cols),
                    parse_input(&rows_ref, stored_rows),
                ),
                parse_input(&chance_ref, stored.game_config.light_chance),
            );
            let settings = Settings { game_config };
            settings.local_save();
            onapply.emit(settings);
        })
    };

    let oncancel = {
        let oncancel = props.oncancel.clone();
        Callback::from(move |_: MouseEvent| oncancel.emit(()))
    };

    html! {
        <Modal>
            <dialog id="settings" open={props.open}>
                <article>
                    <h2>{"Settings"}</h2>
                    <label>
                        {"Columns"}
                        <input ref={cols_ref} type="number" min="1" max="255" value={cols.to_string()}/>
                    </label>
                    <label>
                        {"Rows"}
                        <input ref={rows_ref} type="number" min="1" max="255" value={rows.to_string()}/>
                    </label>
                    <label>
                        {"Light chance"}
                        <input ref={chance_ref} type="number" min="0" max="1" step="0.05"
                            value={current.game_config.light_chance.to_string()}/>
                    </label>
                    <ul>
                        {theme_switcher("Auto", None)}
                        {theme_switcher("Light", Some(Theme::Light))}
                        {theme_switcher("Dark", Some(Theme::Dark))}
                    </ul>
                    <footer>
                        <button type="reset" onclick={oncancel}>{"Cancel"}</button>
                        <button onclick={onapply}>{"Apply"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
