//! AcroForm field construction.
//!
//! Text boxes, dropdowns and checkboxes are written as merged
//! field/widget dictionaries. Radio buttons accumulate widget kids
//! under one logical field per group name; those field dictionaries
//! are only materialized when the form is finished, since kids keep
//! arriving until the run ends. Appearance streams are left to the
//! viewer via `NeedAppearances`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat, dictionary};
use pagescript_render_core::FormControl;
use pagescript_types::Rect;

use crate::renderer::to_win_ansi;

/// /Ff bit for combo-box choice fields.
const FF_COMBO: i64 = 1 << 17;
/// /Ff bits for radio-button fields that cannot be toggled off.
const FF_RADIO: i64 = (1 << 15) | (1 << 14);

const DEFAULT_APPEARANCE: &str = "/Helv 0 Tf 0 g";

struct RadioGroup {
    field_id: ObjectId,
    kids: Vec<ObjectId>,
    value: Option<Vec<u8>>,
}

#[derive(Default)]
pub struct FormState {
    field_ids: Vec<ObjectId>,
    radio_groups: HashMap<String, RadioGroup>,
    radio_order: Vec<String>,
    counter: usize,
}

fn pdf_string(s: &str) -> Object {
    Object::String(to_win_ansi(s), StringFormat::Literal)
}

/// Shared widget-annotation entries: a thin dark border on a white
/// background, printable, attached to `page_id`.
fn widget_base(rect: Rect, page_id: ObjectId) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Widget",
        "Rect" => vec![
            rect.x.into(),
            rect.y.into(),
            rect.right().into(),
            rect.top().into(),
        ],
        "F" => 4,
        "P" => page_id,
        "MK" => dictionary! {
            "BC" => vec![0.2f32.into(), 0.2f32.into(), 0.2f32.into()],
            "BG" => vec![1.0f32.into(), 1.0f32.into(), 1.0f32.into()],
        },
        "BS" => dictionary! { "W" => 1, "S" => "S" },
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fields(&self) -> bool {
        !self.field_ids.is_empty() || !self.radio_order.is_empty()
    }

    fn next_name(&mut self) -> String {
        self.counter += 1;
        format!("f{}", self.counter)
    }

    /// Adds the widget for `control` to `document` and returns its id,
    /// which the caller must list in the page's /Annots.
    pub fn place(
        &mut self,
        document: &mut Document,
        control: &FormControl,
        rect: Rect,
        page_id: ObjectId,
    ) -> ObjectId {
        let mut dict = widget_base(rect, page_id);
        match control {
            FormControl::TextBox { value, max_len } => {
                dict.set("FT", "Tx");
                dict.set("T", pdf_string(&self.next_name()));
                dict.set("DA", pdf_string(DEFAULT_APPEARANCE));
                if let Some(v) = value {
                    dict.set("V", pdf_string(v));
                }
                if let Some(n) = max_len {
                    dict.set("MaxLen", *n as i64);
                }
                let id = document.add_object(dict);
                self.field_ids.push(id);
                id
            }
            FormControl::Dropdown { options, value } => {
                dict.set("FT", "Ch");
                dict.set("T", pdf_string(&self.next_name()));
                dict.set("DA", pdf_string(DEFAULT_APPEARANCE));
                dict.set("Ff", FF_COMBO);
                let opts: Vec<Object> = options.iter().map(|o| pdf_string(o)).collect();
                dict.set("Opt", opts);
                if let Some(v) = value {
                    dict.set("V", pdf_string(v));
                }
                let id = document.add_object(dict);
                self.field_ids.push(id);
                id
            }
            FormControl::CheckBox { checked } => {
                dict.set("FT", "Btn");
                dict.set("T", pdf_string(&self.next_name()));
                let state = if *checked { "Yes" } else { "Off" };
                dict.set("V", Object::Name(state.into()));
                dict.set("AS", Object::Name(state.into()));
                let id = document.add_object(dict);
                self.field_ids.push(id);
                id
            }
            FormControl::Radio { group, export, selected } => {
                let g = match self.radio_groups.entry(group.clone()) {
                    Entry::Occupied(e) => e.into_mut(),
                    Entry::Vacant(e) => {
                        self.radio_order.push(group.clone());
                        e.insert(RadioGroup {
                            field_id: document.new_object_id(),
                            kids: Vec::new(),
                            value: None,
                        })
                    }
                };
                let on_state = to_win_ansi(export);
                let state = if *selected { on_state.clone() } else { b"Off".to_vec() };
                dict.set("Parent", g.field_id);
                dict.set("AS", Object::Name(state));
                let id = document.add_object(dict);
                g.kids.push(id);
                if *selected {
                    g.value = Some(on_state);
                }
                id
            }
        }
    }

    /// Materializes the per-group radio field dictionaries and returns
    /// every top-level field id, in placement order.
    pub fn finish(&mut self, document: &mut Document) -> Vec<Object> {
        for name in &self.radio_order {
            let g = &self.radio_groups[name];
            let kids: Vec<Object> = g.kids.iter().map(|id| Object::from(*id)).collect();
            let value = g.value.clone().unwrap_or_else(|| b"Off".to_vec());
            let dict = dictionary! {
                "FT" => "Btn",
                "Ff" => FF_RADIO,
                "T" => pdf_string(name),
                "Kids" => kids,
                "V" => Object::Name(value),
            };
            document.objects.insert(g.field_id, Object::Dictionary(dict));
        }
        self.field_ids
            .iter()
            .map(|id| Object::from(*id))
            .chain(self.radio_order.iter().map(|n| Object::from(self.radio_groups[n].field_id)))
            .collect()
    }

    /// The document-level /AcroForm dictionary. `helvetica_id` backs
    /// the default appearance string.
    pub fn acroform(&self, fields: Vec<Object>, helvetica_id: ObjectId) -> Dictionary {
        dictionary! {
            "Fields" => fields,
            "NeedAppearances" => true,
            "DA" => pdf_string(DEFAULT_APPEARANCE),
            "DR" => dictionary! {
                "Font" => dictionary! { "Helv" => helvetica_id },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radio(group: &str, export: &str, selected: bool) -> FormControl {
        FormControl::Radio {
            group: group.to_string(),
            export: export.to_string(),
            selected,
        }
    }

    #[test]
    fn radio_groups_keep_first_use_order_and_default_to_off() {
        let mut document = Document::with_version("1.7");
        let page_id = document.new_object_id();
        let mut forms = FormState::new();
        let rect = Rect::new(50.0, 700.0, 14.0, 14.0);

        forms.place(&mut document, &radio("size", "s", false), rect, page_id);
        forms.place(
            &mut document,
            &FormControl::TextBox { value: None, max_len: None },
            rect,
            page_id,
        );
        forms.place(&mut document, &radio("color", "red", true), rect, page_id);
        forms.place(&mut document, &radio("size", "m", false), rect, page_id);

        let fields = forms.finish(&mut document);
        // The text box, then the two radio groups in first-use order.
        assert_eq!(fields.len(), 3);

        let size = document
            .get_object(fields[1].as_reference().unwrap())
            .unwrap()
            .as_dict()
            .unwrap();
        assert_eq!(size.get(b"T").unwrap().as_str().unwrap(), b"size");
        assert_eq!(size.get(b"Kids").unwrap().as_array().unwrap().len(), 2);
        // Nothing selected in the group, so its value stays Off.
        assert_eq!(size.get(b"V").unwrap().as_name().unwrap(), b"Off");

        let color = document
            .get_object(fields[2].as_reference().unwrap())
            .unwrap()
            .as_dict()
            .unwrap();
        assert_eq!(color.get(b"T").unwrap().as_str().unwrap(), b"color");
        assert_eq!(color.get(b"Kids").unwrap().as_array().unwrap().len(), 1);
        assert_eq!(color.get(b"V").unwrap().as_name().unwrap(), b"red");
    }
}
