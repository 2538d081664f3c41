use serde::Deserialize;

// The consumed subset of the Google Books volumes response. Anything the
// API sends beyond these fields is ignored on deserialization.

#[derive(Debug, Clone, Deserialize)]
pub struct VolumesResponse {
    // Only a literal 0 means "no match"; an absent count falls through to
    // the item list.
    #[serde(rename = "totalItems")]
    pub total_items: Option<u32>,
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
    #[serde(rename = "saleInfo")]
    pub sale_info: Option<SaleInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    pub list_price: Option<Price>,
    pub retail_price: Option<Price>,
    pub buy_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub amount: f64,
    pub currency_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOLUMES_JSON: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "kind": "books#volume",
                "id": "s1gVAAAAYAAJ",
                "etag": "HrfLDurbCBo",
                "volumeInfo": {
                    "title": "Pride and Prejudice",
                    "authors": ["Jane Austen"],
                    "publisher": "Penguin",
                    "publishedDate": "2002-12-31",
                    "description": "Austen's most celebrated novel.",
                    "industryIdentifiers": [
                        {"type": "ISBN_10", "identifier": "0141439513"},
                        {"type": "ISBN_13", "identifier": "9780141439518"}
                    ],
                    "pageCount": 480,
                    "language": "en",
                    "imageLinks": {
                        "smallThumbnail": "http://books.google.com/books/content?id=s1gVAAAAYAAJ&zoom=5",
                        "thumbnail": "http://books.google.com/books/content?id=s1gVAAAAYAAJ&zoom=1"
                    }
                },
                "saleInfo": {
                    "country": "US",
                    "saleability": "FOR_SALE",
                    "isEbook": true,
                    "listPrice": {"amount": 9.99, "currencyCode": "USD"},
                    "retailPrice": {"amount": 7.99, "currencyCode": "USD"},
                    "buyLink": "https://play.google.com/store/books/details?id=s1gVAAAAYAAJ"
                }
            }
        ]
    }"#;

    #[test]
    fn deserializes_consumed_fields() {
        let volumes: VolumesResponse = serde_json::from_str(VOLUMES_JSON).unwrap();

        assert_eq!(Some(2), volumes.total_items);
        assert_eq!(1, volumes.items.len());

        let info = &volumes.items[0].volume_info;
        assert_eq!(Some("Pride and Prejudice".to_string()), info.title);
        assert_eq!(Some(vec!["Jane Austen".to_string()]), info.authors);

        let identifiers = info.industry_identifiers.as_ref().unwrap();
        assert_eq!("ISBN_10", identifiers[0].kind);
        assert_eq!("9780141439518", identifiers[1].identifier);

        let sale = volumes.items[0].sale_info.as_ref().unwrap();
        assert_eq!(9.99, sale.list_price.as_ref().unwrap().amount);
        assert_eq!("USD", sale.retail_price.as_ref().unwrap().currency_code);
    }

    #[test]
    fn tolerates_missing_optional_sections() {
        let volumes: VolumesResponse = serde_json::from_str(
            r#"{
                "totalItems": 1,
                "items": [{"volumeInfo": {"title": "Bare Volume"}}]
            }"#,
        )
        .unwrap();

        let volume = &volumes.items[0];
        assert!(volume.sale_info.is_none());
        assert!(volume.volume_info.authors.is_none());
        assert!(volume.volume_info.industry_identifiers.is_none());
        assert!(volume.volume_info.image_links.is_none());
    }

    #[test]
    fn missing_items_deserializes_as_empty_list() {
        let volumes: VolumesResponse = serde_json::from_str(r#"{"totalItems": 0}"#).unwrap();

        assert_eq!(Some(0), volumes.total_items);
        assert!(volumes.items.is_empty());
    }
}
