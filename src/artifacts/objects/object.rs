use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(content: Bytes) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        Ok(ObjectId::hash(&content))
    }
}

impl ObjectId {
    /// Hash raw bytes into an object id
    pub fn hash(content: &[u8]) -> ObjectId {
        let mut hasher = Sha1::new();
        hasher.update(content);

        ObjectId::from_hex_digest(format!("{:x}", hasher.finalize()))
    }
}
