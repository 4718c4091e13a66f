//! Pre-flight walk that rejects NaN and infinite floats.
//!
//! `serde_json` writes non-finite floats as `null`, which is indistinguishable
//! from `None` in the output. Walking the value first with [`FiniteFloats`]
//! turns them into an error instead.

use serde::Serialize;
use serde::ser::{
    self, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
    SerializeTupleStruct, SerializeTupleVariant,
};

type Walk = Result<(), serde_json::Error>;

/// Visits every value and fails on the first non-finite float.
#[derive(Clone, Copy)]
pub(crate) struct FiniteFloats;

/// Returns an error if `value` contains a NaN or infinite float anywhere.
pub(crate) fn check<T: Serialize + ?Sized>(value: &T) -> Walk {
    value.serialize(FiniteFloats)
}

fn float(value: f64) -> Walk {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ser::Error::custom(format!("{value} cannot be represented in JSON")))
    }
}

impl ser::Serializer for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _: bool) -> Walk {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Walk {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Walk {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Walk {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Walk {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Walk {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Walk {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Walk {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Walk {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Walk {
        float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Walk {
        float(v)
    }

    fn serialize_char(self, _: char) -> Walk {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Walk {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Walk {
        Ok(())
    }

    fn serialize_none(self) -> Walk {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Walk {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Walk {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Walk {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Walk {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Walk {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Walk {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(self)
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(self)
    }
}

impl SerializeSeq for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        check(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl SerializeTuple for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        check(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl SerializeTupleStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        check(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl SerializeTupleVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        check(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl SerializeMap for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Walk {
        check(key)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        check(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl SerializeStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Walk {
        check(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl SerializeStructVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Walk {
        check(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}
