//! Affiliate tracking block (`affiliate.*`).

use crate::error::{Result, ValidationError};
use crate::raw::RawParams;
use crate::validate::check_boolean;
use serde::Serialize;

const MAX_CUSTOM_ID_LEN: usize = 256;
const BE_FREE_NETWORK_ID: i64 = 2;
const EBAY_PARTNER_NETWORK_ID: i64 = 9;
const CAMPAIGN_ID_LEN: usize = 10;

/// Validated affiliate parameters. At least one field is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affiliate {
    pub custom_id: Option<String>,
    pub geo_targeting: Option<bool>,
    pub network: Option<AffiliateNetwork>,
}

/// Network and tracking IDs, which are only meaningful together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffiliateNetwork {
    /// 2..=9; 9 is the eBay Partner Network.
    pub network_id: u8,
    /// For the eBay Partner Network, the 10-digit campaign ID.
    pub tracking_id: String,
}

/// Returns `None` when no `affiliate.*` field is present.
pub(crate) fn parse_affiliate(raw: &RawParams) -> Result<Option<Affiliate>> {
    let custom_id = raw
        .get("affiliate.customId")
        .map(|id| {
            if id.chars().count() > MAX_CUSTOM_ID_LEN {
                Err(ValidationError::InvalidCustomIdLength)
            } else {
                Ok(id.to_owned())
            }
        })
        .transpose()?;
    let geo_targeting = raw
        .get("affiliate.geoTargeting")
        .map(check_boolean)
        .transpose()?;

    let network = match (raw.get("affiliate.networkId"), raw.get("affiliate.trackingId")) {
        (Some(network_id), Some(tracking_id)) => Some(check_network(network_id, tracking_id)?),
        (None, None) => None,
        _ => return Err(ValidationError::IncompleteAffiliate),
    };

    if custom_id.is_none() && geo_targeting.is_none() && network.is_none() {
        return Ok(None);
    }
    Ok(Some(Affiliate {
        custom_id,
        geo_targeting,
        network,
    }))
}

fn check_network(network_id: &str, tracking_id: &str) -> Result<AffiliateNetwork> {
    let id = network_id
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNetworkId(network_id.to_owned()))?;
    if !(BE_FREE_NETWORK_ID..=EBAY_PARTNER_NETWORK_ID).contains(&id) {
        return Err(ValidationError::NetworkIdRange);
    }
    if id == EBAY_PARTNER_NETWORK_ID {
        tracking_id
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidTrackingId(tracking_id.to_owned()))?;
        if tracking_id.len() != CAMPAIGN_ID_LEN {
            return Err(ValidationError::InvalidCampaignId);
        }
    }
    Ok(AffiliateNetwork {
        network_id: u8::try_from(id).map_err(|_| ValidationError::NetworkIdRange)?,
        tracking_id: tracking_id.to_owned(),
    })
}
