// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in voice performer names.
//!
//! Columns: credited Japanese name, English, Korean, Russian. An empty
//! translation falls back along the [`FallbackChain`](super::FallbackChain).

pub const PERFORMERS: &[(&str, &str, &str, &str)] = &[
    ("ゆかな", "Yukana Nogami", "", "Ногами Юкана"),
    ("チョー", "Cho", "쵸", "Чо"),
    ("ポポナ", "Popona", "", "Попона"),
    ("下野 紘", "Hiro Shimono", "시모노 히로", "Хиро Симоно"),
    ("中原 麻衣", "Mai Nakahara", "나카하라 마이", "Маи Накахара"),
    ("中尾 隆聖", "Ryusei Nakao", "나카오 류세이", "Рюсэй Накао"),
    ("中村 悠一", "Yuichi Nakamura", "유이치 나카무라", "Юичи Накамура"),
    ("中田 譲治", "Joji Nakata", "나카타 조지", "Дзёдзи Наката"),
    ("中西 茂樹", "Shigeki Nakanishi", "", "Сигэки Наканиши"),
    ("久野 美咲", "Misaki Kuno", "", "Мисаки Куно"),
    ("井上 和彦", "Kazuhiko Inoue", "", "Казухико Иноэ"),
    ("井上 喜久子", "Kikuko Inoue", "", "Кикуко Иноуэ"),
    ("井上 麻里奈", "Marina Inoue", "", "Марина Иноуэ"),
    ("井口 裕香", "Yuka Iguchi", "", "Юка Игути"),
    ("今井 麻美", "Asami Imai", "", "Асами Имаи"),
    ("伊瀬 茉莉也", "Mariya Ise", "", "Мария Исэ"),
    ("伊藤 静", "Shizuka Ito", "", "Сидзука Ито"),
    ("会 一太郎", "Ichitaro Ai", "", "Ичитаро Ай"),
    ("住友 優子", "Yuko Sumitomo", "", "Юко Сумитомо"),
    ("佐倉 綾音", "Ayane Sakura", "", "Аянэ Сакура"),
    ("佐武 宇綺", "Uki Satake", "", "Уки Сатакэ"),
    ("佐藤 利奈", "Rina Sato", "", "Рина Сато"),
    ("佐藤 友啓", "Tomohiro Sato", "", "Томохиро Сато"),
    ("佐藤 聡美", "Satomi Sato", "", "Сатоми Сато"),
    ("佳村 はるか", "Haruka Yoshimura", "", "Харука Ёсимура"),
    ("保志 総一朗", "Soichiro Hoshi", "", "Соичиро Хоши"),
    ("光吉 猛修", "Takenobu Mitsuyoshi", "", "Такэнобу Мицуёши"),
    ("内田 真礼", "Maaya Uchida", "", "Маая Утида"),
    ("千本木 彩花", "Sayaka Senbongi", "", "Саяка Сэмбонги"),
    ("古賀 葵", "Aoi Koga", "", "Аой Кога"),
    ("吉野 裕行", "Hiroyuki Yoshino", "", "Хироюки Ёшино"),
    ("名塚 佳織", "Kaori Nazuka", "", "Каори Надзука"),
    ("喜多村 英梨", "Eri Kitamura", "", "Эри Китамура"),
    ("坂本 真綾", "Maaya Sakamoto", "", "Маая Сакамото"),
    ("堀川 りょう", "Ryo Horikawa", "", "Рё Хорикава"),
    ("堀江 由衣", "Yui Horie", "", "Юи Хориэ"),
    ("増田 俊樹", "Toshiki Masuda", "", "Тошики Масуда"),
    ("天野 名雪", "Nayuki Amano", "", "Наюки Амано"),
    ("子安 武人", "Takehito Koyasu", "", "Такэхито Коясу"),
    ("安元 洋貴", "Hiroki Yasumoto", "", "Хироки Ясумото"),
    ("安済 知佳", "Chika Anzai", "", "Чика Андзаи"),
    ("寺島 拓篤", "Takuma Terashima", "", "Такума Тэрашима"),
    ("小倉 唯", "Yui Ogura", "", "Юй Огура"),
    ("小原 莉子", "Riko Kohara", "", "Рико Кохара"),
    ("小山 茉美", "Mami Koyama", "", "Мами Кояма"),
    ("小松 未可子", "Mikako Komatsu", "", "Микако Комацу"),
    ("小林 ゆう", "Yu Kobayashi", "", "Ю Кобаяши"),
    ("小清水 亜美", "Ami Koshimizu", "", "Ами Косимидзу"),
    ("小西 克幸", "Katsuyuki Konishi", "", "Кацуюки Кониши"),
    ("小野 大輔", "Daisuke Ono", "", "Дайсукэ Оно"),
    ("小野坂 昌也", "Masaya Onosaka", "", "Масая Оносака"),
    ("山岡 ゆり", "Yuri Yamaoka", "", "Юри Ямаока"),
    ("岡本 信彦", "Nobuhiko Okamoto", "", "Нобухико Окамото"),
    ("岩下 読男", "Moai Iwashita", "", "Моаи Ивасита"),
    ("島本 須美", "Sumi Shimamoto", "", "Суми Симамото"),
    ("島﨑 信長", "Nobunaga Shimazaki", "", "Нобунага Симадзаки"),
    ("川村 万梨阿", "Maria Kawamura", "", "Мария Кавамура"),
    ("川澄 綾子", "Ayako Kawasumi", "", "Аяко Кавасуми"),
    ("市来 光弘", "Mitsuhiro Ichiki", "", "Мицухиро Ичики"),
    ("引坂 理絵", "Rie Hikisaka", "", "Рие Хирисака"),
    ("悠木 碧", "Aoi Yuki", "", "Аои Юки"),
    ("戸松 遥", "Haruka Tomatsu", "토마츠 하루카", "Харука Томацу"),
    ("斉藤 壮馬", "Soma Saito", "", "Сома Сайто"),
    ("斉藤 朱夏", "Shuka Saito", "", "Шюка Саито"),
    ("斎藤 千和", "Chiwa Saito", "사이토 치와", "Тива Сайто"),
    ("新田 恵海", "Emi Nitta", "", "Эми Нитта"),
    ("日笠 陽子", "Yoko Hikasa", "", "Ёко Хикаса"),
    ("早見 沙織", "Saori Hayami", "", "Саори Хаями"),
    ("木村 珠莉", "Juri Kimura", "", "Дзюри Кимура"),
    ("木村 良平", "Ryohei Kimura", "", "Рёхэй Кимура"),
    ("本渡 楓", "Kaede Hondo", "", "Каэдэ Хондо"),
    ("杉田 智和", "Tomokazu Sugita", "", "Томокадзу Сугита"),
    ("村川 梨衣", "Rie Murakawa", "", "Риэ Муракава"),
    ("東山 奈央 ", "Nao Toyama", "토야마 나오", "Нао Тояма"),
    ("松岡 禎丞", "Yoshitsugu Matsuoka", "마츠오카 요시츠구", "Ёсицугу Мацуока"),
    ("柿原 徹也", "Tetsuya Kakihara", "카키하라 테츠야", "Тэцуя Какихара"),
    ("桃井 はるこ", "Haruko Momoi", "", "Харуко Момои"),
    ("桑島 法子", "Houko Kuwashima", "", "Хоко Кувасима"),
    ("梶 裕貴", "Yuki Kaji", "", "Юки Кадзи"),
    ("森久保 祥太郎", "Showtaro Morikubo", "", "Сётаро Морикубо"),
    ("植田 佳奈", "Kana Ueda", "", "Кана Уэда"),
    ("榊原 良子", "Yoshiko Sakakibara", "", "Ёсико Сакакибара"),
    ("榎本 温子", "Atsuko Enomoto", "", "Ацуко Эномото"),
    ("横山 智佐", "Chisa Yokoyama", "", "Тиса Ёкояма"),
    ("橘田 いずみ", "Izumi Kitta", "", "Идзуми Китта"),
    ("櫻井 孝宏", "Takahiro Sakurai", "", "Такахиро Сакураи"),
    ("水樹 奈々", "Nana Mizuki", "", "Нана Мидзуки"),
    ("水橋 かおり", "Kaori Mizuhashi", "", "Каори Мидзухаси"),
    ("江口 拓也", "Takuya Eguchi", "", "Такуя Эгучи"),
    ("沢城 みゆき", "Miyuki Sawashiro", "", "Миюки Саваширо"),
    ("沼倉 愛美", "Manami Numakura", "", "Манами Нумакура"),
    ("洲崎 綾", "Aya Suzaki", "", "Ая Судзаки"),
    ("清水 彩香", "Ayaka Shimizu", "", "Аяка Симидзу"),
    ("渡辺 久美子", "Kumiko Watanabe", "", "Кумико Ватанабэ"),
    ("潘 めぐみ", "Megumi Han", "", "Мэгуми Хан"),
    ("瀬戸 麻沙美", "Asami Seto", "", "Асами Сэто"),
    ("玄田 哲章", "Tessho Genda", "", "Тэссё Гэнда"),
    ("生天目 仁美", "Hitomi Nabatame", "", "Хитоми Набатамэ"),
    ("田中 理恵", "Rie Tanaka", "", "Риэ Танака"),
    ("田村 ゆかり", "Yukari Tamura", "", "Юкари Тамура"),
    ("田辺 留依", "Rui Tanabe", "타나베 루이", "Руи Танабэ"),
    ("甲斐田 裕子", "Yuko Kaida", "", "Юко Каида"),
    ("白石 涼子", "Ryoko Shiraishi", "", "Рёко Сираиси"),
    ("白鳥 哲", "Tetsu Shiratori", "", "Тэцу Сиратори"),
    ("皆口 裕子", "Yuko Minaguchi", "미나구치 유코", "Юко Минагучи"),
    ("矢島 晶子", "Akiko Yajima", "", "Юко Минагучи"),
    ("石田 彰", "Akira Ishida", "", "Акира Исида"),
    ("神原 大地", "Daichi Kanbara", "", "Даичи Камбара"),
    ("神谷 浩史", "Hiroshi Kamiya", "", "Хироши Камия"),
    ("福山 潤", "Jun Fukuyama", "", "Дзюн Фукуяма"),
    ("秋元 羊介", "Yosuke Akimoto", "", "Ёсукэ Акимото"),
    ("秦 佐和子", "Sawako Hata", "", "Савако Хата"),
    ("種田 梨沙", "Risa Taneda", "타네다 리사", "Риса Танеда"),
    ("立木 文彦", "Fumihiko Tachiki", "타치키 후미히코", "Фумихико Тачики"),
    ("立花 理香", "Rika Tachibana", "", "Рика Тачибана"),
    ("竹達 彩奈", "Ayana Taketatsu", "", "Аяна Такэтацу"),
    ("細谷 佳正", "Yoshimasa Hosoya", "", "Ёшимаса Хосоя"),
    ("紲星 あかり", "Kizuna Akari", "", "Кизуна Акари"),
    ("結月 ゆかり", "Yuzuki Yukari", "", "Юзуки Акари"),
    ("緑川 光", "Hikaru Midorikawa", "", "Хикару Мидорикава"),
    ("緒方 恵美", "Megumi Ogata", "", "Мэгуми Огата"),
    ("能登 麻美子", "Mamiko Noto", "", "Мамико Ното"),
    ("花江 夏樹", "Natsuki Hanae", "", "Нацуки Ханаэ"),
    ("花澤 香菜", "Kana Hanazawa", "", "Кана Ханадзава"),
    ("若本 規夫", "Norio Wakamoto", "", "Норио Вакамото"),
    ("茅野 愛衣", "Ai Kayano", "", "Аи Каяно"),
    ("草尾 毅", "Takeshi Kusao", "", "Такэши Кусао"),
    ("菊地 美香", "Mika Kikuchi", "", "Мика Кикучи"),
    ("蒼井 翔太", "Shouta Aoi", "", "Сёта Аои"),
    ("藤本 結衣", "Yui Fujimoto", "", "Юи Фудзимото"),
    ("藤田 曜子", "Yoko Fujita", "", "Ёко Фудзита"),
    ("藤田 茜", "Akane Fujita", "", "Аканэ Фудзита"),
    ("諏訪 彩花", "Ayaka Suwa", "", "Аяка Сува"),
    ("諏訪部 順一", "Junichi Suwabe", "", "Дзюнъичи Сувабэ"),
    ("豊口 めぐみ", "Megumi Toyoguchi", "", "Мэгуми Тоёгучи"),
    ("豊崎 愛生", "Aki Toyosaki", "", "Аки Тоёсаки"),
    ("近藤 佳奈子", "Kanako Kondo", "", "Канако Кондо"),
    ("速水 奨", "Sho Hayami", "", "Сё Хаями"),
    ("那須 晃行", "Akiyuki Nasu", "", "Акаюки Насу"),
    ("金元 寿子", "Hisako Kanemoto", "", "Хисако Канэмото"),
    ("金田 アキ", "Aki Kanada", "", "Аки Канада"),
    ("釘宮 理恵", "Rie Kugimiya", "", "Риэ Кугимия"),
    ("鈴村 健一", "Kenichi Suzumura", "스즈무라 켄이치", "Кэнъити Судзумура"),
    ("銀河 万丈", "Banjo Ginga", "", "Бандзё Гинга"),
    ("長谷川 唯", "Yui Hasegawa", "", "Юи Хасэгава"),
    ("門脇 舞以", "Mai Kadowaki", "", "Маи Кадоваки"),
    ("関 智一", "Tomokazu Seki", "", "Томокадзу Сэки"),
    ("阿澄 佳奈", "Kana Asumi", "", "Кана Асуми"),
    ("陶山 章央", "Akio Suyama", "", "Акио Суяма"),
    ("雨宮 天", "Sora Amamiya", "", "Сора Амамия"),
    ("飛田 展男", "Nobuo Tobita", "", "Нобуо Тобита"),
    ("飯田 友子", "Yuko Iida", "이이다 유우코", "Юко Иида"),
    ("高木 友梨香", "Yurika Takagi", "", "Юрика Такаги"),
    ("高橋 未奈美", "Minami Takahashi", "", "Минами Такахаши"),
    ("高橋 李依", "Rie Takahashi", "", "Риэ Такахаши"),
    ("高野 麻里佳", "Marika Kono", "", "Марика Коно"),
    ("黒沢 ともよ", "Tomoyo Kurosawa", "", "Томоё Куросава"),
    ("こおろぎさとみ", "Satomi Korogi", "코오로기 사토미", "Сатоми Короги"),
    ("三宅 健太", "Kenta Miyake", "", "Кэнта Миякэ"),
    ("諸星 すみれ", "Sumire Morohoshi", "", "Сумирэ Морохоси"),
    ("宮本 侑芽", "Yume Miyamoto", "", "Юмэ Миямото"),
    ("川島 得愛", "Tokuyoshi Kawashima", "", "Токуёси Кавасима"),
    ("Ｍ・Ａ・Ｏ", "M・A・O", "M・A・O", "M・A・O"),
    ("？？？", "???", "???", "???"),
    ("", "Unknown", "알 수 없는", "Неизвестно"),
];
