use std::io;

use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDetectionInformation {
    pub application_id: String,
    pub application_instance_id: Option<String>,
    pub flow_information: Option<String>,
}

impl ApplicationDetectionInformation {
    pub fn new(
        application_id: String,
        application_instance_id: Option<String>,
        flow_information: Option<String>,
    ) -> Self {
        Self {
            application_id,
            application_instance_id,
            flow_information,
        }
    }

    // Convenience constructors for common application detection scenarios
    pub fn simple_app(app_id: &str) -> Self {
        Self::new(app_id.to_string(), None, None)
    }

    pub fn app_with_instance(app_id: &str, instance_id: &str) -> Self {
        Self::new(app_id.to_string(), Some(instance_id.to_string()), None)
    }

    pub fn app_with_flow_info(app_id: &str, flow_info: &str) -> Self {
        Self::new(app_id.to_string(), None, Some(flow_info.to_string()))
    }

    pub fn full_app_detection(app_id: &str, instance_id: &str, flow_info: &str) -> Self {
        Self::new(
            app_id.to_string(),
            Some(instance_id.to_string()),
            Some(flow_info.to_string()),
        )
    }

    pub fn marshal_len(&self) -> usize {
        let mut len = 1; // flags byte

        // Application ID: 1 byte length + string content
        len += 1 + self.application_id.len();

        // Application Instance ID (optional): 1 byte length + string content
        if let Some(ref instance_id) = self.application_instance_id {
            len += 1 + instance_id.len();
        }

        // Flow Information (optional): 1 byte length + string content
        if let Some(ref flow_info) = self.flow_information {
            len += 1 + flow_info.len();
        }

        len
    }

    pub fn marshal(&self) -> Result<Vec<u8>, io::Error> {
        let mut buf = Vec::with_capacity(self.marshal_len());
        self.marshal_to(&mut buf)?;
        Ok(buf)
    }

    pub fn marshal_to(&self, buf: &mut Vec<u8>) -> Result<(), io::Error> {
        // Marshal flags byte to indicate which optional fields are present
        let mut flags = 0u8;
        if self.application_instance_id.is_some() {
            flags |= 0x01; // Application Instance ID present
        }
        if self.flow_information.is_some() {
            flags |= 0x02; // Flow Information present
        }
        buf.push(flags);

        // Marshal Application ID (required)
        if self.application_id.len() > 255 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Application ID too long (max 255 bytes)",
            ));
        }
        buf.push(self.application_id.len() as u8);
        buf.extend_from_slice(self.application_id.as_bytes());

        // Marshal Application Instance ID (optional)
        if let Some(ref instance_id) = self.application_instance_id {
            if instance_id.len() > 255 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Application Instance ID too long (max 255 bytes)",
                ));
            }
            buf.push(instance_id.len() as u8);
            buf.extend_from_slice(instance_id.as_bytes());
        }

        // Marshal Flow Information (optional)
        if let Some(ref flow_info) = self.flow_information {
            if flow_info.len() > 255 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Flow Information too long (max 255 bytes)",
                ));
            }
            buf.push(flow_info.len() as u8);
            buf.extend_from_slice(flow_info.as_bytes());
        }

        Ok(())
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.len() < 2 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Application detection information requires at least 2 bytes",
            ));
        }

        let mut cursor = 0;

        // Parse flags byte
        let flags = data[cursor];
        cursor += 1;

        // Parse Application ID (required)
        if cursor >= data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Missing application ID length",
            ));
        }
        let app_id_len = data[cursor] as usize;
        cursor += 1;

        if cursor + app_id_len > data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Insufficient data for application ID",
            ));
        }
        let application_id = String::from_utf8(data[cursor..cursor + app_id_len].to_vec())
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Invalid UTF-8 in application ID",
                )
            })?;
        cursor += app_id_len;

        // Parse Application Instance ID (optional, based on flags)
        let mut application_instance_id = None;
        if (flags & 0x01) != 0 {
            if cursor >= data.len() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Missing application instance ID length",
                ));
            }
            let instance_id_len = data[cursor] as usize;
            cursor += 1;

            if cursor + instance_id_len > data.len() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Insufficient data for application instance ID",
                ));
            }
            let instance_id = String::from_utf8(data[cursor..cursor + instance_id_len].to_vec())
                .map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        "Invalid UTF-8 in application instance ID",
                    )
                })?;
            application_instance_id = Some(instance_id);
            cursor += instance_id_len;
        }

        // Parse Flow Information (optional, based on flags)
        let mut flow_information = None;
        if (flags & 0x02) != 0 {
            if cursor >= data.len() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Missing flow information length",
                ));
            }
            let flow_info_len = data[cursor] as usize;
            cursor += 1;

            if cursor + flow_info_len > data.len() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Insufficient data for flow information",
                ));
            }
            let flow_info = String::from_utf8(data[cursor..cursor + flow_info_len].to_vec())
                .map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        "Invalid UTF-8 in flow information",
                    )
                })?;
            flow_information = Some(flow_info);
        }

        Ok(Self {
            application_id,
            application_instance_id,
            flow_information,
        })
    }

    pub fn to_ie(&self) -> Result<Ie, io::Error> {
        let data = self.marshal()?;
        Ok(Ie::new(IeType::ApplicationDetectionInformation, data))
    }
}
