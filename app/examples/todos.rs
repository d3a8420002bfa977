use color_eyre::eyre::Result;
use r_storeapp::store::{
    action::TodoAction,
    derived::{active_todo_count, render_visible_todos},
    reducer::root_reducer,
    state::VisibilityFilter,
};
use r_storelib::store::{Dispatcher, StateGetter, Store, StoreConfig};
use strum::IntoEnumIterator;

fn initialize_logger() -> Result<()> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    initialize_logger()?;

    let config = StoreConfig::builder().log_actions(true).build()?;
    let store = Store::create(root_reducer()?, config)?;

    for (id, text) in [(1, "read the docs"), (2, "write a reducer"), (3, "ship")]
    {
        store.dispatch(TodoAction::AddTodo {
            id,
            text: text.to_string(),
        })?;
    }

    store.dispatch(TodoAction::ToggleTodo(1))?;

    for filter in VisibilityFilter::iter() {
        store.dispatch(TodoAction::SetVisibilityFilter(filter))?;
        println!("{filter}:\n{}\n", render_visible_todos(&store.get_state()));
    }

    println!("{} todo(s) left", active_todo_count(&store.get_state()));
    println!(
        "state: {}",
        serde_json::to_string_pretty(&store.get_state().to_json()?)?
    );

    Ok(())
}
