use crate::collaborators::{DocumentLoader, DocumentWriter, SpreadsheetConverter};
use crate::config::PipelineConfig;
use crate::document::FlowDocument;
use crate::signature_record::SignatureRecord;
use crate::stamp_composer::StampComposer;
use crate::Error;
use std::fs::File;
use std::io::BufWriter;

/// Spreadsheet in, stamped document out.
///
/// Steps, in order:
/// 1. read `{name}.xlsx` and convert it to PDF
/// 2. store the PDF as `{name}.pdf`
/// 3. load the PDF as a flow document and add the stamps
/// 4. write the result as `{name}.{extension}`
///
/// The first step that fails stops the pipeline.
pub struct StampPipeline<C, L, W> {
    config: PipelineConfig,
    converter: C,
    loader: L,
    writer: W,
    composer: StampComposer,
}

impl<C, L, W> StampPipeline<C, L, W>
where
    C: SpreadsheetConverter,
    L: DocumentLoader,
    W: DocumentWriter,
{
    pub fn new(config: PipelineConfig, mut converter: C, mut loader: L, mut writer: W) -> Self {
        converter.apply_license(&config.license);
        loader.apply_license(&config.license);
        writer.apply_license(&config.license);
        let composer = StampComposer::new(config.layout).with_style(config.stamp_style.clone());
        StampPipeline {
            config,
            converter,
            loader,
            writer,
            composer,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(&self, records: &[SignatureRecord]) -> Result<FlowDocument, Error> {
        let pdf = self.convert_to_pdf()?;
        let document = self.stamp(&pdf, records)?;
        self.write_output(&document)?;
        Ok(document)
    }

    /// Load `pdf` and add a stamp for every record.
    pub fn stamp(&self, pdf: &[u8], records: &[SignatureRecord]) -> Result<FlowDocument, Error> {
        let mut document = self.loader.load(pdf)?;
        if !self.composer.append_signature_stamps(&mut document, records) {
            log::warn!("No signature stamps were added to `{}`.", self.config.file_name);
        }
        Ok(document)
    }

    fn convert_to_pdf(&self) -> Result<Vec<u8>, Error> {
        let spreadsheet_path = self.config.spreadsheet_path();
        let spreadsheet = std::fs::read(&spreadsheet_path)?;
        let pdf = self
            .converter
            .convert(&spreadsheet, &self.config.page_style)?;

        let pdf_path = self.config.pdf_path();
        std::fs::write(&pdf_path, &pdf)?;
        log::info!(
            "Converted `{}` to `{}`.",
            spreadsheet_path.display(),
            pdf_path.display()
        );
        Ok(pdf)
    }

    fn write_output(&self, document: &FlowDocument) -> Result<(), Error> {
        let output_path = self.config.file_path(self.writer.extension());
        let mut output = BufWriter::new(File::create(&output_path)?);
        self.writer.write(document, &mut output)?;
        log::info!("Wrote `{}`.", output_path.display());
        Ok(())
    }
}
