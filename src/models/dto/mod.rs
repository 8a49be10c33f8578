pub mod subject_dto;
pub use subject_dto::{decode_payload, encode_payload, payload_schema, QuestionDto, SubjectDto};
