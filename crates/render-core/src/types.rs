/// One interactive form field, as placed by the `control` command.
///
/// Radio is the only variant with cross-statement identity: widgets
/// sharing a group name accumulate into one logical field, which the
/// backend looks up (and creates on first use) by that name.
#[derive(Debug, Clone, PartialEq)]
pub enum FormControl {
    TextBox {
        value: Option<String>,
        max_len: Option<usize>,
    },
    Dropdown {
        options: Vec<String>,
        value: Option<String>,
    },
    CheckBox {
        checked: bool,
    },
    Radio {
        group: String,
        export: String,
        selected: bool,
    },
}
