use ethabi::{TupleCodec, Value};
use crate::Error;
use crate::eth::signature::encode_topic;
use crate::eth::{EventSpec, Log};

/// Receives the decoded fields of one event, indexed fields first, in declaration order.
pub trait EventOutput {
    fn assign(&mut self, values: Vec<Value>) -> Result<(), ethabi::Error>;
}

impl EventOutput for Vec<Value> {
    fn assign(&mut self, values: Vec<Value>) -> Result<(), ethabi::Error> {
        *self = values;
        Ok(())
    }
}

pub struct EthereumEvent {
    pub name: String,
    signature: String,
    topic: [u8; 32],
    topic_codec: TupleCodec,
    data_codec: TupleCodec,
}

impl EthereumEvent {
    pub fn new(name: &str, topics: &[&str], data: &[&str]) -> Result<Self, Error> {
        let spec_error = |error: ethabi::Error| Error::Spec {
            name: name.to_string(),
            reason: error.to_string(),
        };
        let topic_codec = ethabi::parse_tuple(topics).map_err(spec_error)?;
        let data_codec = ethabi::parse_tuple(data).map_err(spec_error)?;

        let members = [topic_codec.signature(), data_codec.signature()]
            .into_iter()
            .filter(|members| !members.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        let signature = format!("{}({})", name, members);
        let topic = encode_topic(&signature);

        Ok(Self {
            name: name.to_string(),
            signature,
            topic,
            topic_codec,
            data_codec,
        })
    }

    pub fn from_spec(spec: &EventSpec) -> Result<Self, Error> {
        Self::new(spec.name, spec.topics, spec.data)
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Topic 0 of every log this event emits.
    pub fn topic(&self) -> [u8; 32] {
        self.topic
    }

    /// Same signature hash and the declared number of indexed fields.
    pub fn matches(&self, log: &Log) -> bool {
        log.topics.first() == Some(&self.topic)
            && log.topics.len() == 1 + self.topic_codec.len()
    }

    /// Indexed fields followed by data fields.
    pub fn decode_log(&self, log: &Log) -> Result<Vec<Value>, Error> {
        let indexed = log.topics.iter().skip(1).flatten().copied().collect::<Vec<u8>>();
        let mut values = self.topic_codec.decode_values(&indexed).map_err(|error| self.decoding_error(error))?;
        values.extend(self.data_codec.decode_values(&log.data).map_err(|error| self.decoding_error(error))?);
        Ok(values)
    }

    /// Decodes the first matching log in `logs` into `out`.
    pub fn parse_into<T: EventOutput + ?Sized>(&self, out: &mut T, logs: &[Log]) -> Result<(), Error> {
        if logs.is_empty() {
            return Err(Error::NoLogs { event: self.name.clone() });
        }

        let log = logs.iter()
            .find(|log| self.matches(log))
            .ok_or_else(|| Error::EventNotFound {
                event: self.name.clone(),
                topic: hex::encode(self.topic),
            })?;
        log::debug!("{} matched log from {}", self.signature, log.address);

        let values = self.decode_log(log)?;
        out.assign(values).map_err(|error| self.decoding_error(error))
    }

    pub fn parse<T: EventOutput + Default>(&self, logs: &[Log]) -> Result<T, Error> {
        let mut out = T::default();
        self.parse_into(&mut out, logs)?;
        Ok(out)
    }

    fn decoding_error(&self, error: ethabi::Error) -> Error {
        match error {
            ethabi::Error::Arity { expected, actual } => Error::ArityMismatch {
                name: self.name.clone(),
                expected,
                actual,
            },
            source => Error::Decoding {
                name: self.name.clone(),
                source,
            },
        }
    }
}
