use tabled::Table;

use crate::{
    error, info,
    management::{self, ScanOutcome},
    plex::PlexApi,
    success,
    types::Section,
    utils, warning,
};

pub async fn list_libraries<A: PlexApi + ?Sized>(api: &A) {
    match management::list_sections(api).await {
        Ok(sections) => print_sections(&sections),
        Err(e) => error!("Cannot list libraries. Err: {}", e),
    }
}

pub async fn scan_library<A: PlexApi + ?Sized>(api: &A, library_id: &str) {
    let outcome = match management::scan_or_list(api, library_id).await {
        Ok(outcome) => outcome,
        Err(e) => error!("Cannot list libraries. Err: {}", e),
    };

    match outcome {
        ScanOutcome::Started { section } => {
            info!("Scanning Library Id: {} {}", section.id, section.title);
            success!("Scan of {} started", section.title);
        }
        ScanOutcome::Failed { section, error } => {
            warning!("Failed to scan {}: {}", section.title, error);
        }
        ScanOutcome::UnknownSection { id, sections } => {
            warning!("The \"Library Id\" {} does not exist", id);
            print_sections(&sections);
        }
    }
}

fn print_sections(sections: &[Section]) {
    let table = Table::new(utils::section_table_rows(sections));
    println!("{}", table);
}
