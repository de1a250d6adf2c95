use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Where answers and messages are written.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

/// How output is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// One JSON object per line.
    Json,
    /// Bare answers, one per line.
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Write the answer to one part of the puzzle.
    pub fn answer<T>(&mut self, part: u32, value: T) -> io::Result<()>
    where
        T: fmt::Display + Serialize,
    {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: Answer { part, value },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{value}")?;
            }
        }

        Ok(())
    }

    /// Report an error.
    ///
    /// Plain output leaves this to the report printed when the process exits.
    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        if let OutputKind::Json = &self.kind {
            self.json(&Line {
                ty: LineType::Message,
                data: Message {
                    output: m,
                    kind: MessageKind::Error,
                },
            })?;
        }

        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> io::Result<O> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
    Message,
}

#[derive(Serialize)]
struct Answer<T> {
    part: u32,
    value: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

struct Message<T> {
    output: T,
    kind: MessageKind,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &DisplayString(&self.output))?;
        map.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
