use crate::app::AppState;
use crate::error::Result;
use crate::output::Output;
use crate::utils::path::ensure_dir_exists;

/// Create the output directory if needed and show it in the file manager
pub fn handle_open(state: &AppState, output: &mut Output) -> Result<()> {
    let dir = state.config.get_output_path();
    ensure_dir_exists(&dir)?;
    state.env.open_directory(&dir)?;
    output.opened(&dir)?;
    Ok(())
}
