/// Console adapters for presenting command output
mod stdout_presenter;

pub use stdout_presenter::StdoutPresenter;
