use phf::phf_map;

pub static GERMAN: phf::Map<char, &'static str> = phf_map! {
    'ä' => "ae",
    'ö' => "oe",
    'ü' => "ue",
    'ß' => "ss",
};
