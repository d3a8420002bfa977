use color_eyre::eyre::Result;
use r_storeapp::store::{
    action::CounterAction, configure_store, derived::select_count,
};
use r_storelib::store::{Dispatcher, StateGetter};
use std::rc::Rc;

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

    let store = Rc::new(configure_store()?);

    let weak = Rc::downgrade(&store);
    let subscription = store.subscribe_fn(move || {
        if let Some(s) = weak.upgrade() {
            println!("count: {}", select_count(&s.get_state()));
        }
    });

    store.dispatch(CounterAction::Increment)?;
    store.dispatch(CounterAction::Increment)?;
    store.dispatch(CounterAction::IncrementByAmount(5))?;
    store.dispatch(CounterAction::Decrement)?;

    subscription.unsubscribe();

    println!("final state: {}", store.get_state().to_json()?);

    Ok(())
}
