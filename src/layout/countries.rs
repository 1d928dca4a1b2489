//! Arabic names for the form's country list.

/// (English name as submitted, Arabic name).
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("Afghanistan", "أفغانستان"),
    ("Albania", "ألبانيا"),
    ("Algeria", "الجزائر"),
    ("Andorra", "أندورا"),
    ("Angola", "أنغولا"),
    ("Antigua and Barbuda", "أنتيغوا وباربودا"),
    ("Argentina", "الأرجنتين"),
    ("Armenia", "أرمينيا"),
    ("Australia", "أستراليا"),
    ("Austria", "النمسا"),
    ("Azerbaijan", "أذربيجان"),
    ("Bahamas", "الباهاما"),
    ("Bahrain", "البحرين"),
    ("Bangladesh", "بنغلاديش"),
    ("Barbados", "بربادوس"),
    ("Belarus", "بيلاروسيا"),
    ("Belgium", "بلجيكا"),
    ("Belize", "بليز"),
    ("Benin", "بنين"),
    ("Bhutan", "بوتان"),
    ("Bolivia", "بوليفيا"),
    ("Bosnia and Herzegovina", "البوسنة والهرسك"),
    ("Botswana", "بتسوانا"),
    ("Brazil", "البرازيل"),
    ("Brunei", "بروناي"),
    ("Bulgaria", "بلغاريا"),
    ("Burkina Faso", "بوركينا فاسو"),
    ("Burundi", "بوروندي"),
    ("Cabo Verde", "الرأس الأخضر"),
    ("Cambodia", "كمبوديا"),
    ("Cameroon", "الكاميرون"),
    ("Canada", "كندا"),
    ("Central African Republic", "جمهورية أفريقيا الوسطى"),
    ("Chad", "تشاد"),
    ("Chile", "تشيلي"),
    ("China", "الصين"),
    ("Colombia", "كولومبيا"),
    ("Comoros", "جزر القمر"),
    ("Costa Rica", "كوستاريكا"),
    ("Côte d'Ivoire", "ساحل العاج"),
    ("Croatia", "كرواتيا"),
    ("Cuba", "كوبا"),
    ("Cyprus", "قبرص"),
    ("Czechia", "التشيك"),
    ("Democratic Republic of the Congo", "جمهورية الكونغو الديمقراطية"),
    ("Denmark", "الدنمارك"),
    ("Djibouti", "جيبوتي"),
    ("Dominica", "دومينيكا"),
    ("Dominican Republic", "الجمهورية الدومينيكية"),
    ("Ecuador", "الإكوادور"),
    ("Egypt", "مصر"),
    ("El Salvador", "السلفادور"),
    ("Equatorial Guinea", "غينيا الاستوائية"),
    ("Eritrea", "إريتريا"),
    ("Estonia", "إستونيا"),
    ("Eswatini", "إسواتيني"),
    ("Ethiopia", "إثيوبيا"),
    ("Federated States of Micronesia", "ولايات ميكرونيزيا الفيدرالية"),
    ("Fiji", "فيجي"),
    ("Finland", "فنلندا"),
    ("France", "فرنسا"),
    ("Gabon", "الغابون"),
    ("Gambia", "غامبيا"),
    ("Georgia", "جورجيا"),
    ("Germany", "ألمانيا"),
    ("Ghana", "غانا"),
    ("Greece", "اليونان"),
    ("Grenada", "غرينادا"),
    ("Guatemala", "غواتيمالا"),
    ("Guinea", "غينيا"),
    ("Guinea-Bissau", "غينيا بيساو"),
    ("Guyana", "غيانا"),
    ("Haiti", "هايتي"),
    ("Honduras", "هندوراس"),
    ("Hungary", "المجر"),
    ("Iceland", "آيسلندا"),
    ("India", "الهند"),
    ("Indonesia", "إندونيسيا"),
    ("Iran", "إيران"),
    ("Iraq", "العراق"),
    ("Ireland", "إيرلندا"),
    ("Israel", "إسرائيل"),
    ("Italy", "إيطاليا"),
    ("Jamaica", "جامايكا"),
    ("Japan", "اليابان"),
    ("Jordan", "الأردن"),
    ("Kazakhstan", "كازاخستان"),
    ("Kenya", "كينيا"),
    ("Kiribati", "كيريباتي"),
    ("Kosovo", "كوسوفو"),
    ("Kuwait", "الكويت"),
    ("Kyrgyzstan", "قيرغيزستان"),
    ("Laos", "لاوس"),
    ("Latvia", "لاتفيا"),
    ("Lebanon", "لبنان"),
    ("Lesotho", "ليسوتو"),
    ("Liberia", "ليبيريا"),
    ("Libya", "ليبيا"),
    ("Liechtenstein", "ليختنشتاين"),
    ("Lithuania", "ليتوانيا"),
    ("Luxembourg", "لوكسمبورغ"),
    ("Madagascar", "مدغشقر"),
    ("Malawi", "مالاوي"),
    ("Malaysia", "ماليزيا"),
    ("Maldives", "المالديف"),
    ("Mali", "مالي"),
    ("Malta", "مالطا"),
    ("Marshall Islands", "جزر مارشال"),
    ("Mauritania", "موريتانيا"),
    ("Mauritius", "موريشيوس"),
    ("Mexico", "المكسيك"),
    ("Moldova", "مولدوفا"),
    ("Monaco", "موناكو"),
    ("Mongolia", "منغوليا"),
    ("Montenegro", "الجبل الأسود"),
    ("Morocco", "المغرب"),
    ("Mozambique", "موزمبيق"),
    ("Myanmar", "ميانمار"),
    ("Namibia", "ناميبيا"),
    ("Nauru", "ناورو"),
    ("Nepal", "نيبال"),
    ("Netherlands", "هولندا"),
    ("New Zealand", "نيوزيلندا"),
    ("Nicaragua", "نيكاراغوا"),
    ("Niger", "النيجر"),
    ("Nigeria", "نيجيريا"),
    ("North Korea", "كوريا الشمالية"),
    ("North Macedonia", "مقدونيا الشمالية"),
    ("Norway", "النرويج"),
    ("Oman", "عمان"),
    ("Pakistan", "باكستان"),
    ("Palau", "بالاو"),
    ("Panama", "بنما"),
    ("Papua New Guinea", "بابوا غينيا الجديدة"),
    ("Paraguay", "باراجواي"),
    ("Peru", "بيرو"),
    ("Philippines", "الفلبين"),
    ("Poland", "بولندا"),
    ("Portugal", "البرتغال"),
    ("Qatar", "قطر"),
    ("Republic of the Congo", "جمهورية الكونغو"),
    ("Romania", "رومانيا"),
    ("Russia", "روسيا"),
    ("Rwanda", "رواندا"),
    ("Saint Kitts and Nevis", "سانت كيتس ونيفيس"),
    ("Saint Lucia", "سانت لوسيا"),
    ("Saint Vincent and the Grenadines", "سانت فنسنت والغرينادين"),
    ("Samoa", "ساموا"),
    ("San Marino", "سان مارينو"),
    ("Sao Tome and Principe", "ساو تومي وبرينسيب"),
    ("Saudi Arabia", "المملكة العربية السعودية"),
    ("Senegal", "السنغال"),
    ("Serbia", "صربيا"),
    ("Seychelles", "سيشيل"),
    ("Sierra Leone", "سيراليون"),
    ("Singapore", "سنغافورة"),
    ("Slovakia", "سلوفاكيا"),
    ("Slovenia", "سلوفينيا"),
    ("Solomon Islands", "جزر سولومون"),
    ("Somalia", "الصومال"),
    ("South Africa", "جنوب أفريقيا"),
    ("South Korea", "كوريا الجنوبية"),
    ("South Sudan", "جنوب السودان"),
    ("Spain", "إسبانيا"),
    ("Sri Lanka", "سريلانكا"),
    ("Sudan", "السودان"),
    ("Suriname", "سورينام"),
    ("Sweden", "السويد"),
    ("Switzerland", "سويسرا"),
    ("Syria", "سوريا"),
    ("Taiwan", "تايوان"),
    ("Tajikistan", "طاجيكستان"),
    ("Tanzania", "تنزانيا"),
    ("Thailand", "تايلاند"),
    ("Timor-Leste", "تيمور الشرقية"),
    ("Togo", "توغو"),
    ("Tonga", "تونغا"),
    ("Trinidad and Tobago", "ترينيداد وتوباغو"),
    ("Tunisia", "تونس"),
    ("Turkey", "تركيا"),
    ("Turkmenistan", "تركمانستان"),
    ("Tuvalu", "توفالو"),
    ("Uganda", "أوغندا"),
    ("Ukraine", "أوكرانيا"),
    ("United Arab Emirates", "الإمارات العربية المتحدة"),
    ("United Kingdom", "المملكة المتحدة"),
    ("United States of America", "الولايات المتحدة الأمريكية"),
    ("Uruguay", "أوروغواي"),
    ("Uzbekistan", "أوزبكستان"),
    ("Vanuatu", "فانواتو"),
    ("Vatican City", "دولة الفاتيكان"),
    ("Venezuela", "فنزويلا"),
    ("Vietnam", "فيتنام"),
    ("Yemen", "اليمن"),
    ("Zambia", "زامبيا"),
    ("Zimbabwe", "زيمبابوي"),
];

/// Arabic name of a country given its English name, if the form knows it.
pub fn arabic_country_name(english: &str) -> Option<&'static str> {
    let wanted = english.trim();
    COUNTRY_NAMES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, arabic)| *arabic)
}
