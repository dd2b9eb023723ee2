use chrono::{Duration, Local};
use signature_stamp::{
    CertificateInfo, DocumentLoader, DocumentWriter, JsonWriter, PdfLoader, PipelineConfig,
    SignatureRecord, StampComposer,
};
use std::{fs::File, io::BufWriter};

// Usage: cargo run --example stamp_doc [config.json]
// Stamps `{fileName}.pdf` from the work dir and writes `{fileName}.json`.
fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => PipelineConfig::from_json_file(path).unwrap(),
        None => PipelineConfig::default(),
    };
    let pdf_data = std::fs::read(config.pdf_path()).unwrap();

    let now = Local::now().naive_local();
    let certificate = CertificateInfo {
        organization_name: "ООО \"Ромашка\"".to_owned(),
        first_name: "Семен".to_owned(),
        surname: "Семенович".to_owned(),
        last_name: "Горбунков".to_owned(),
        serial_number: "123".to_owned(),
        valid_from: now,
        valid_to: now + Duration::days(365),
    };
    let records = vec![
        SignatureRecord::new(&certificate, Some(now), Some(now)),
        SignatureRecord::new(&certificate, None, None),
    ];

    let mut document = PdfLoader::from_page_style(&config.page_style)
        .load(&pdf_data)
        .unwrap();
    StampComposer::new(config.layout)
        .with_style(config.stamp_style.clone())
        .append_signature_stamps(&mut document, &records);

    let writer = JsonWriter { pretty: true };
    let mut output = BufWriter::new(File::create(config.file_path(writer.extension())).unwrap());
    writer.write(&document, &mut output).unwrap();
}
