use phf::phf_map;

// ICAO Doc 9303 table, used in Russian passports since 2013.
pub static RUSSIAN_PASSPORT: phf::Map<char, &'static str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
    'й' => "i",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ъ' => "ie",
    'ы' => "y",
    'ь' => "",
    'э' => "e",
    'ю' => "iu",
    'я' => "ia",
};
