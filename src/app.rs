use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::cli::CliArgs;
use crate::core::context::AppContext;
use crate::core::models::RawScheduleBlock;
use crate::errors::{Error, Result, require_parse};
use crate::grid::{GridBuilder, Selection};
use crate::logging::LogTarget;
use crate::ui::display_data::GridDisplayData;
use crate::ui::display_manager::DisplayManager;
use crate::ui::width_util::WidthUtil;

/// Whether grid cell labels are cut to fit the terminal. Piped output is
/// never cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputWidth {
    Terminal,
    Unbounded,
}

pub fn load_schedule(path: &Path) -> Result<Vec<RawScheduleBlock>> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::Parse(format!(
            "Failed to read schedule '{}': {}",
            path.display(),
            e
        ))
    })?;
    RawScheduleBlock::from_json_array(&text)
}

/// load config → read records → build grid → select → render
pub fn run<W: Write + ?Sized>(args: &CliArgs, width: OutputWidth, out: &mut W) -> Result<()> {
    let ctx = AppContext::from_args(args)?;
    let logger = ctx.logger.clone();

    let raw = load_schedule(&args.schedule_path)?;
    logger.info(
        format!(
            "Loaded {} schedule record(s) from {}",
            raw.len(),
            args.schedule_path.display()
        ),
        LogTarget::FileOnly,
    );

    let grid = GridBuilder::from_config(&ctx.config, &logger).build(&raw);

    let hook_logger = logger.clone();
    let mut selection = Selection::new().with_hook(move |block| {
        hook_logger.info(format!("Selected {block}"), LogTarget::FileOnly);
    });
    if let Some(position) = args.select {
        let block = require_parse(
            grid.block_at(position),
            format!("No schedule block at position {position}."),
        )?;
        if !block.is_placeable() {
            return Err(Error::Domain(format!(
                "Schedule block at position {position} has no recognized day and is not on the grid."
            )));
        }
        selection.click(block);
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &grid.snapshot())?;
        writeln!(out)?;
        return Ok(());
    }

    let max_cell_width = match width {
        OutputWidth::Terminal => WidthUtil
            .detected_width()
            .map(DisplayManager::cell_width_for),
        OutputWidth::Unbounded => None,
    };
    let dm = DisplayManager::new().with_data(
        GridDisplayData::new()
            .with_paint(ctx.config.color_output())
            .with_max_cell_width(max_cell_width),
    );
    dm.render_grid(&grid, &selection, out)?;
    if args.show_config {
        dm.render_config(&ctx.config, out)?;
    }
    Ok(())
}
