use crate::error::CodecError;
use crate::header::{Header, HEADER_LEN};
use crate::question::Question;
use crate::resource_record::ResourceRecord;
use domain_name_query_types::QType;
use std::net::Ipv4Addr;

/// Which section the parsed records were read from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    Answer,
    Authority,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResponseMessage {
    header: Header,
    questions: Vec<Question>,
    section: Option<Section>,
    records: Vec<ResourceRecord>,
}

impl ResponseMessage {
    /// Parses header, every question, then one trailing section.
    ///
    /// The type of the last question picks the section: A reads
    /// `answer_count` records, NS reads `authority_count` records, both
    /// starting right after the questions. Any other type parses no records.
    pub fn parse_response(response: &[u8]) -> Result<Self, CodecError> {
        let header = Header::parse(response)?;
        let mut position = HEADER_LEN;

        let mut questions = Vec::with_capacity(header.question_count as usize);
        for _ in 0..header.question_count {
            let question = Question::parse(response, position)?;
            position = question.position;
            questions.push(question);
        }

        let section = match questions
            .last()
            .and_then(|q| QType::from_code(q.query_type))
        {
            Some(QType::A) => Some(Section::Answer),
            Some(QType::Ns) => Some(Section::Authority),
            None => None,
        };

        let count = match section {
            Some(Section::Answer) => header.answer_count,
            Some(Section::Authority) => header.authority_count,
            None => 0,
        };

        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let record = ResourceRecord::parse(response, position)?;
            position = record.position;
            records.push(record);
        }

        let msg = Self {
            header,
            questions,
            section,
            records,
        };

        Ok(msg)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn section(&self) -> Option<Section> {
        self.section
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn first_address(&self) -> Option<Ipv4Addr> {
        self.records.iter().find_map(ResourceRecord::ipv4)
    }

    pub fn last_address(&self) -> Option<Ipv4Addr> {
        self.records.iter().rev().find_map(ResourceRecord::ipv4)
    }

    pub fn addresses(&self) -> Vec<Ipv4Addr> {
        self.records.iter().filter_map(ResourceRecord::ipv4).collect()
    }
}
