/// Use cases module containing application orchestration
mod process_documents;

pub use process_documents::ProcessDocumentsUseCase;
