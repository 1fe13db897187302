use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::frame::buffer::FrameBuffer;
use std::path::{Path, PathBuf};

/// Write one RGBA8 buffer as a PNG file, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameBuffer) -> SpriteResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            SpriteError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    image::save_buffer_with_format(
        path,
        frame.as_bytes(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SpriteError::io(format!("write png '{}': {e}", path.display())))
}

/// One PNG per frame: `<dir>/<prefix>_0000.png`, `<dir>/<prefix>_0001.png`, ...
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` with the `frame` prefix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, "frame")
    }

    /// Sink writing into `dir` with a custom file prefix.
    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// Path used for frame `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:04}.png", self.prefix, idx.0))
    }

    /// Files written by the last batch, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> SpriteResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            SpriteError::io(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameBuffer) -> SpriteResult<()> {
        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        tracing::debug!(files = self.written.len(), dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

/// All frames packed row-major into one PNG grid.
#[derive(Debug)]
pub struct SpriteSheetSink {
    path: PathBuf,
    columns: u32,
    cell: (u32, u32),
    grid_columns: u32,
    sheet: Option<image::RgbaImage>,
}

impl SpriteSheetSink {
    /// Sheet written to `path` with at most `columns` frames per row.
    pub fn new(path: impl Into<PathBuf>, columns: u32) -> SpriteResult<Self> {
        if columns == 0 {
            return Err(SpriteError::validation("sprite sheet columns must be >= 1"));
        }
        Ok(Self {
            path: path.into(),
            columns,
            cell: (0, 0),
            grid_columns: 0,
            sheet: None,
        })
    }

    /// Pixel size of the sheet for `frame_count` cells of `width x height`.
    pub fn sheet_size(&self, frame_count: u32, width: u32, height: u32) -> (u32, u32) {
        let cols = self.columns.min(frame_count).max(1);
        let rows = frame_count.div_ceil(cols).max(1);
        (cols * width, rows * height)
    }
}

impl FrameSink for SpriteSheetSink {
    fn begin(&mut self, cfg: SinkConfig) -> SpriteResult<()> {
        let (w, h) = self.sheet_size(cfg.frame_count, cfg.width, cfg.height);
        self.cell = (cfg.width, cfg.height);
        self.grid_columns = self.columns.min(cfg.frame_count).max(1);
        self.sheet = Some(image::RgbaImage::new(w, h));
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameBuffer) -> SpriteResult<()> {
        let Some(sheet) = self.sheet.as_mut() else {
            return Err(SpriteError::io("sprite sheet push_frame before begin"));
        };
        if (frame.width(), frame.height()) != self.cell {
            return Err(SpriteError::validation(format!(
                "frame {} is {}x{}, sheet cells are {}x{}",
                idx.0,
                frame.width(),
                frame.height(),
                self.cell.0,
                self.cell.1
            )));
        }
        let tile = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.as_bytes().to_vec())
            .ok_or_else(|| SpriteError::io("frame buffer does not match its dimensions"))?;
        let x = (idx.0 % self.grid_columns) * self.cell.0;
        let y = (idx.0 / self.grid_columns) * self.cell.1;
        image::imageops::replace(sheet, &tile, i64::from(x), i64::from(y));
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        let Some(sheet) = self.sheet.take() else {
            return Ok(());
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                SpriteError::io(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        sheet
            .save_with_format(&self.path, image::ImageFormat::Png)
            .map_err(|e| SpriteError::io(format!("write png '{}': {e}", self.path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
