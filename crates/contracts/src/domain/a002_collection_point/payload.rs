use super::form::PointFormState;

pub const IMAGE_FIELD: &str = "image";

/// One part of the `POST /points` multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField<'a, F> {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: &'a F },
}

impl<'a, F> MultipartField<'a, F> {
    pub fn name(&self) -> &'static str {
        match self {
            MultipartField::Text { name, .. } | MultipartField::File { name, .. } => *name,
        }
    }
}

impl<F> PointFormState<F> {
    /// Selected item ids, ascending, comma separated: `"1,2,6"`
    pub fn items_csv(&self) -> String {
        self.selected_items()
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Body parts in submission order. The image part is present only when
    /// a file is attached.
    pub fn multipart_fields(&self) -> Vec<MultipartField<'_, F>> {
        let position = self.position();
        let text = |name: &'static str, value: String| MultipartField::Text { name, value };

        let mut fields = vec![
            text("name", self.name.clone()),
            text("email", self.email.clone()),
            text("whatsapp", self.whatsapp.clone()),
            text("uf", self.selected_uf().to_string()),
            text("city", self.selected_city().to_string()),
            text("latitude", position.lat.to_string()),
            text("longitude", position.lng.to_string()),
            text("items", self.items_csv()),
        ];

        if let Some(file) = self.file() {
            fields.push(MultipartField::File {
                name: IMAGE_FIELD,
                file,
            });
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_item::ItemId;
    use crate::shared::geo::LatLng;

    fn filled_form() -> PointFormState<&'static str> {
        let mut form = PointFormState::new();
        form.name = "Mercado do Bairro".to_string();
        form.email = "contato@mercado.com".to_string();
        form.whatsapp = "41988887777".to_string();
        form.select_uf("PR");
        form.select_city("Curitiba");
        form.set_position(LatLng::new(-25.5, -49.25));
        form.toggle_item(ItemId(6));
        form.toggle_item(ItemId(1));
        form.toggle_item(ItemId(2));
        form
    }

    fn text_value<'a>(fields: &'a [MultipartField<'_, &str>], name: &str) -> Option<&'a str> {
        fields.iter().find_map(|f| match f {
            MultipartField::Text { name: n, value } if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_text_fields() {
        let form = filled_form();
        let fields = form.multipart_fields();

        let names: Vec<_> = fields.iter().map(MultipartField::name).collect();
        assert_eq!(
            names,
            vec!["name", "email", "whatsapp", "uf", "city", "latitude", "longitude", "items"]
        );
        assert_eq!(text_value(&fields, "uf"), Some("PR"));
        assert_eq!(text_value(&fields, "city"), Some("Curitiba"));
        assert_eq!(text_value(&fields, "latitude"), Some("-25.5"));
        assert_eq!(text_value(&fields, "longitude"), Some("-49.25"));
        assert_eq!(text_value(&fields, "items"), Some("1,2,6"));
    }

    #[test]
    fn test_no_file_no_image_field() {
        let form = filled_form();

        let fields = form.multipart_fields();

        assert!(fields.iter().all(|f| f.name() != IMAGE_FIELD));
    }

    #[test]
    fn test_file_adds_exactly_one_image_field() {
        let mut form = filled_form();
        form.set_file(Some("first.jpg"));
        form.set_file(Some("photo.jpg"));

        let fields = form.multipart_fields();
        let images: Vec<_> = fields.iter().filter(|f| f.name() == IMAGE_FIELD).collect();

        assert_eq!(images.len(), 1);
        assert_eq!(
            images[0],
            &MultipartField::File {
                name: IMAGE_FIELD,
                file: &"photo.jpg"
            }
        );
    }

    #[test]
    fn test_items_csv_empty() {
        let form: PointFormState = PointFormState::new();
        assert_eq!(form.items_csv(), "");
    }
}
