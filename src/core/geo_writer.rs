use crate::core::{ElectrodeRecord, ViewStyle};
use std::io::{self, Write};

/// Writes a Gmsh post-processing view: one `SP`/`T3` pair per electrode
/// between the opening marker and the styling postscript.
pub struct GeoWriter<W: Write> {
    inner: W,
    points: usize,
}

impl<W: Write> GeoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, points: 0 }
    }

    pub fn begin_view(&mut self, style: &ViewStyle) -> io::Result<()> {
        writeln!(self.inner, "View\"{}\"{{", style.view_name)
    }

    pub fn write_electrode(&mut self, record: &ElectrodeRecord) -> io::Result<()> {
        let ElectrodeRecord { x, y, z, name, .. } = record;
        writeln!(self.inner, "SP({}, {}, {}){{0}};", x, y, z)?;
        writeln!(self.inner, "T3({}, {}, {}, 0){{\"{}\"}};", x, y, z, name)?;
        self.points += 1;
        Ok(())
    }

    /// Closes the view and styles it, then flushes and hands back the sink.
    pub fn finish(mut self, style: &ViewStyle) -> io::Result<W> {
        writeln!(self.inner, "}};")?;
        writeln!(self.inner)?;
        writeln!(self.inner, "myView = PostProcessing.NbViews-1;")?;
        writeln!(self.inner, "View[myView].PointType={};", style.point_type)?;
        writeln!(self.inner, "View[myView].PointSize={};", style.point_size)?;
        writeln!(self.inner, "View[myView].LineType={};", style.line_type)?;
        writeln!(self.inner, "View[myView].LineWidth={};", style.line_width)?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    pub fn points_written(&self) -> usize {
        self.points
    }
}
