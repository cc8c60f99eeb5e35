use phf::phf_map;

/// Short "web" romanization of Russian, common in URLs: `ж -> j`, `х -> h`, `у -> y`.
pub static RUSSIAN: phf::Map<char, &'static str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'ж' => "j",
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
    'у' => "y",
    'ф' => "f",
    'х' => "h",
    'ц' => "c",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "sch",
    'ъ' => "",
    'ы' => "y",
    'ь' => "",
    'э' => "e",
    'ю' => "u",
    'я' => "ya",
};
