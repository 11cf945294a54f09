//! Product identifiers and their structural/checksum rules.

use crate::error::{Result, ValidationError};
use crate::raw::RawParams;
use crate::types::ProductIdType;
use serde::Serialize;

const ISBN_SHORT_LEN: usize = 10;
const ISBN_LONG_LEN: usize = 13;
const UPC_LEN: usize = 12;
const EAN_SHORT_LEN: usize = 8;
const EAN_LONG_LEN: usize = 13;

/// A validated `productId.@type` / `productId` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductId {
    pub id_type: ProductIdType,
    pub value: String,
}

/// Reads and validates the product identifier pair.
pub(crate) fn parse_product_id(raw: &RawParams) -> Result<ProductId> {
    let (Some(id_type), Some(value)) = (raw.get("productId.@type"), raw.get("productId")) else {
        return Err(ValidationError::ProductIdMissing);
    };
    let id_type = ProductIdType::from_wire(id_type)
        .ok_or_else(|| ValidationError::UnsupportedProductIdType(id_type.to_owned()))?;
    check_product_id(id_type, value)?;
    Ok(ProductId {
        id_type,
        value: value.to_owned(),
    })
}

fn check_product_id(id_type: ProductIdType, value: &str) -> Result<()> {
    match id_type {
        ProductIdType::ReferenceId if value.is_empty() => Err(ValidationError::InvalidProductIdLength),
        ProductIdType::ReferenceId => Ok(()),
        ProductIdType::Isbn => {
            if value.len() != ISBN_SHORT_LEN && value.len() != ISBN_LONG_LEN {
                return Err(ValidationError::InvalidIsbnLength);
            }
            if !is_valid_isbn(value) {
                return Err(ValidationError::InvalidIsbn);
            }
            Ok(())
        }
        ProductIdType::Upc => {
            if value.len() != UPC_LEN {
                return Err(ValidationError::InvalidUpcLength);
            }
            if !is_valid_ean(value) {
                return Err(ValidationError::InvalidUpc);
            }
            Ok(())
        }
        ProductIdType::Ean => {
            if value.len() != EAN_SHORT_LEN && value.len() != EAN_LONG_LEN {
                return Err(ValidationError::InvalidEanLength);
            }
            if !is_valid_ean(value) {
                return Err(ValidationError::InvalidEan);
            }
            Ok(())
        }
    }
}

fn digit(b: u8) -> Option<u32> {
    char::from(b).to_digit(10)
}

/// ISBN-10 uses the running-sum method (a final `X` counts as 10) and must
/// total a multiple of 11. ISBN-13 weights digits 1, 3, 1, ... and must
/// total a multiple of 10.
fn is_valid_isbn(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() == ISBN_SHORT_LEN {
        let (mut acc, mut sum) = (0u32, 0u32);
        for (i, &b) in bytes.iter().enumerate() {
            let d = match digit(b) {
                Some(d) => d,
                None if i == ISBN_SHORT_LEN - 1 && b == b'X' => 10,
                None => return false,
            };
            acc += d;
            sum += acc;
        }
        return sum % 11 == 0;
    }

    let mut sum = 0u32;
    for (i, &b) in bytes.iter().enumerate() {
        let Some(d) = digit(b) else {
            return false;
        };
        sum += if i % 2 == 0 { d } else { d * 3 };
    }
    sum % 10 == 0
}

/// Modulo-10 check shared by UPC-A, EAN-8 and EAN-13. The weight-3
/// positions depend on the code length.
fn is_valid_ean(ean: &str) -> bool {
    let bytes = ean.as_bytes();
    let Some((&check, body)) = bytes.split_last() else {
        return false;
    };
    let len = bytes.len();
    let mut sum = 0u32;
    for (i, &b) in body.iter().enumerate() {
        let Some(d) = digit(b) else {
            return false;
        };
        let triple = match len {
            EAN_SHORT_LEN | UPC_LEN => i % 2 == 0,
            EAN_LONG_LEN => i % 2 == 1,
            _ => false,
        };
        sum += if triple { d * 3 } else { d };
    }
    match digit(check) {
        Some(c) => (sum + c) % 10 == 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id_type: &str, value: &str) -> Result<ProductId> {
        parse_product_id(&RawParams::from([
            ("productId.@type", id_type),
            ("productId", value),
        ]))
    }

    #[test]
    fn both_halves_required() {
        let raw = RawParams::from([("productId", "123")]);
        assert_eq!(parse_product_id(&raw), Err(ValidationError::ProductIdMissing));
        let raw = RawParams::from([("productId.@type", "ISBN")]);
        assert_eq!(parse_product_id(&raw), Err(ValidationError::ProductIdMissing));
    }

    #[test]
    fn reference_id_non_empty() {
        assert!(product("ReferenceID", "53039031").is_ok());
        assert_eq!(
            product("ReferenceID", ""),
            Err(ValidationError::InvalidProductIdLength)
        );
    }

    #[test]
    fn isbn_checksums() {
        assert!(product("ISBN", "0131103628").is_ok());
        assert!(product("ISBN", "9780131101630").is_ok());
        assert!(product("ISBN", "043942089X").is_ok());
        assert_eq!(product("ISBN", "886154142X"), Err(ValidationError::InvalidIsbn));
        assert_eq!(product("ISBN", "9861541429"), Err(ValidationError::InvalidIsbn));
        assert_eq!(product("ISBN", "X131103628"), Err(ValidationError::InvalidIsbn));
        assert_eq!(product("ISBN", "12345"), Err(ValidationError::InvalidIsbnLength));
    }

    #[test]
    fn upc_checksum() {
        assert!(product("UPC", "036000291452").is_ok());
        assert_eq!(product("UPC", "036000291453"), Err(ValidationError::InvalidUpc));
        assert_eq!(product("UPC", "03600029145"), Err(ValidationError::InvalidUpcLength));
    }

    #[test]
    fn ean_checksums() {
        assert!(product("EAN", "96385074").is_ok());
        assert!(product("EAN", "4006381333931").is_ok());
        assert_eq!(product("EAN", "4006381333932"), Err(ValidationError::InvalidEan));
        assert_eq!(product("EAN", "4006381A33931"), Err(ValidationError::InvalidEan));
        assert_eq!(product("EAN", "123456789"), Err(ValidationError::InvalidEanLength));
    }

    #[test]
    fn unsupported_type() {
        assert_eq!(
            product("ASIN", "B000000000"),
            Err(ValidationError::UnsupportedProductIdType("ASIN".into()))
        );
    }
}
